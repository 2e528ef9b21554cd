use super::super::domain::Basic;

/// Built-in FMCSA code set: (code, description, BASIC, severity, CFR part, OOS eligible, moving).
#[rustfmt::skip]
pub(super) const BUILTIN_CODES: &[(&str, &str, Basic, u8, &str, bool, bool)] = &[
    // Unsafe driving, 49 CFR Part 392
    ("392.2", "Operating a CMV while ill or fatigued", Basic::UnsafeDriving, 5, "392", false, false),
    ("392.2S", "Speeding", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2-SLLS", "Speeding 1-5 mph over limit", Basic::UnsafeDriving, 1, "392", false, true),
    ("392.2-SLMS", "Speeding 6-10 mph over limit", Basic::UnsafeDriving, 4, "392", false, true),
    ("392.2-SLMNS", "Speeding 11-14 mph over limit", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2-SL15", "Speeding 15+ mph over limit", Basic::UnsafeDriving, 7, "392", false, true),
    ("392.2C", "Failure to use caution for hazardous conditions", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2LC", "Improper lane change", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2FYR", "Failure to yield right of way", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2R", "Reckless driving", Basic::UnsafeDriving, 10, "392", true, true),
    ("392.2T", "Following too closely/tailgating", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2FTC", "Failure to obey traffic control device", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.2P", "Improper passing", Basic::UnsafeDriving, 4, "392", false, true),
    ("392.2U", "Improper turns", Basic::UnsafeDriving, 4, "392", false, true),
    ("392.4", "Drugs - Use of amphetamines, narcotics, etc.", Basic::ControlledSubstances, 10, "392", true, false),
    ("392.5", "Alcohol - Possession/use while on duty", Basic::ControlledSubstances, 10, "392", true, false),
    ("392.5A2", "Alcohol - Under the influence", Basic::ControlledSubstances, 10, "392", true, false),
    ("392.6", "Scheduling run to necessitate speeding", Basic::UnsafeDriving, 5, "392", false, true),
    ("392.7", "Unsafe equipment operation", Basic::VehicleMaintenance, 5, "392", false, false),
    ("392.9", "Operating unsafe/improperly loaded CMV", Basic::VehicleMaintenance, 6, "392", true, false),
    ("392.10", "Railroad crossing violation", Basic::UnsafeDriving, 7, "392", false, true),
    ("392.14", "Failure to use hazard warning flashers", Basic::UnsafeDriving, 2, "392", false, false),
    ("392.16", "Seat belt violation", Basic::UnsafeDriving, 7, "392", false, true),
    ("392.22", "Stopped vehicle failure to use hazard warning", Basic::UnsafeDriving, 5, "392", false, false),
    ("392.60", "Unauthorized passenger", Basic::UnsafeDriving, 4, "392", false, false),
    ("392.71", "Using/equipping radar detector", Basic::UnsafeDriving, 3, "392", false, false),
    ("392.80", "Texting while driving", Basic::UnsafeDriving, 10, "392", true, true),
    ("392.82", "Using hand-held mobile phone", Basic::UnsafeDriving, 10, "392", true, true),

    // Hours of service, 49 CFR Part 395
    ("395.3A", "11-Hour driving limit violation", Basic::HoursOfService, 7, "395", true, false),
    ("395.3A2", "14-Hour rule violation", Basic::HoursOfService, 7, "395", true, false),
    ("395.3B", "60/70 Hour rule violation", Basic::HoursOfService, 7, "395", true, false),
    ("395.3C", "34-Hour restart violation", Basic::HoursOfService, 5, "395", false, false),
    ("395.5", "HOS violation - Passenger carrier", Basic::HoursOfService, 7, "395", true, false),
    ("395.8", "Record of duty status (log) violation", Basic::HoursOfService, 5, "395", false, false),
    ("395.8A", "Log not current (up to date)", Basic::HoursOfService, 5, "395", false, false),
    ("395.8E", "False log entry/ELD data", Basic::HoursOfService, 7, "395", true, false),
    ("395.8F", "Failing to retain RODS", Basic::HoursOfService, 4, "395", false, false),
    ("395.8H", "Driver failing to submit RODS", Basic::HoursOfService, 4, "395", false, false),
    ("395.8K", "ELD information packet not available", Basic::HoursOfService, 2, "395", false, false),
    ("395.15", "On-board recording device failure", Basic::HoursOfService, 4, "395", false, false),
    ("395.22", "ELD violation", Basic::HoursOfService, 4, "395", false, false),
    ("395.24", "Driver not in possession of ELD info packet", Basic::HoursOfService, 2, "395", false, false),
    ("395.26", "ELD recording/transfer failure", Basic::HoursOfService, 5, "395", false, false),
    ("395.30", "Operator not using ELD", Basic::HoursOfService, 5, "395", false, false),

    // Driver fitness, 49 CFR Part 391
    ("391.11", "Driver not qualified", Basic::DriverFitness, 6, "391", true, false),
    ("391.11B2", "Operating without valid CDL", Basic::DriverFitness, 8, "391", true, false),
    ("391.11B4", "CDL wrong class", Basic::DriverFitness, 5, "391", true, false),
    ("391.11B5", "No required endorsement", Basic::DriverFitness, 5, "391", true, false),
    ("391.11B6", "Operating with CDL restriction violation", Basic::DriverFitness, 4, "391", false, false),
    ("391.15", "CDL disqualified/suspended/revoked", Basic::DriverFitness, 10, "391", true, false),
    ("391.21", "No employment application on file", Basic::DriverFitness, 2, "391", false, false),
    ("391.23", "Driving record inquiry violation", Basic::DriverFitness, 2, "391", false, false),
    ("391.25", "Annual MVR review not completed", Basic::DriverFitness, 2, "391", false, false),
    ("391.27", "Certification of violations not completed", Basic::DriverFitness, 2, "391", false, false),
    ("391.31", "Road test not completed", Basic::DriverFitness, 3, "391", false, false),
    ("391.41", "No valid medical certificate", Basic::DriverFitness, 5, "391", true, false),
    ("391.43", "Medical examination not performed", Basic::DriverFitness, 3, "391", false, false),
    ("391.45", "Medical certificate not in driver possession", Basic::DriverFitness, 2, "391", false, false),
    ("391.51", "DQ file not maintained", Basic::DriverFitness, 2, "391", false, false),

    // Controlled substances/alcohol, 49 CFR Part 382
    ("382.115", "Failing to implement alcohol/drug program", Basic::ControlledSubstances, 6, "382", false, false),
    ("382.301", "Pre-employment test not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.303", "Post-accident test not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.305", "Random testing violation", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.307", "Reasonable suspicion test not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.309", "Return-to-duty test not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.311", "Follow-up testing not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.401", "D&A records not maintained", Basic::ControlledSubstances, 3, "382", false, false),
    ("382.405", "Test results records not available", Basic::ControlledSubstances, 3, "382", false, false),
    ("382.501", "Positive drug test - using driver", Basic::ControlledSubstances, 10, "382", true, false),
    ("382.503", "Refused D&A test", Basic::ControlledSubstances, 10, "382", true, false),
    ("382.505", "Return-to-duty process not followed", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.601", "D&A testing policy not provided", Basic::ControlledSubstances, 2, "382", false, false),
    ("382.701", "Clearinghouse query not conducted", Basic::ControlledSubstances, 5, "382", false, false),
    ("382.703", "Clearinghouse information not obtained", Basic::ControlledSubstances, 4, "382", false, false),

    // Vehicle maintenance equipment, 49 CFR Part 393
    ("393.9", "Inoperative required lamp", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.11", "Lamp mounting/visibility violation", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.13", "Retro-reflective sheeting violation", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.17", "Lamp/lighting not required type", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.19", "Hazard warning lamp violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.22", "Combination lamp/reflector violation", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.24", "Headlamp violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.25", "Lamp/reflector mounting violation", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.40", "Inadequate brakes", Basic::VehicleMaintenance, 7, "393", true, false),
    ("393.42", "Brake system violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.43", "Brake connections violation", Basic::VehicleMaintenance, 5, "393", false, false),
    ("393.45", "Brake tubing/hose violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.47", "Brake lining/drum/rotor violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.48", "Brake out of adjustment", Basic::VehicleMaintenance, 4, "393", true, false),
    ("393.50", "ABS malfunction", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.51", "Brake warning system violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.53", "Automatic brake adjuster violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.55", "Air brake violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.60", "Glazing/window violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.62", "Wiper/defroster violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.65", "Fuel system violation", Basic::VehicleMaintenance, 5, "393", true, false),
    ("393.67", "Liquid fuel tank violation", Basic::VehicleMaintenance, 5, "393", false, false),
    ("393.70", "Coupling device violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.71", "Fifth wheel violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.75", "Tire violation", Basic::VehicleMaintenance, 5, "393", true, false),
    ("393.76", "Sleeper berth violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.77", "Heater violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.78", "Windshield mounting/condition", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.80", "Exhaust system violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.81", "Horn inoperative", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.82", "Speedometer inoperative", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.83", "Exhaust discharge violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.86", "Rear end protection violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.87", "Flags for projection", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.88", "Television receiver violation", Basic::VehicleMaintenance, 2, "393", false, false),
    ("393.89", "Bus driveshaft protection", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.90", "Bus warning device violation", Basic::VehicleMaintenance, 3, "393", false, false),
    ("393.93", "Seats/belts violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.95", "Emergency equipment violation", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.100", "Cargo securement violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.102", "Cargo securement system", Basic::VehicleMaintenance, 5, "393", false, false),
    ("393.104", "Blocking/bracing violation", Basic::VehicleMaintenance, 5, "393", false, false),
    ("393.106", "Tiedown violation", Basic::VehicleMaintenance, 5, "393", false, false),
    ("393.201", "Frame/cab/body violation", Basic::VehicleMaintenance, 5, "393", true, false),
    ("393.203", "Cab/body components", Basic::VehicleMaintenance, 4, "393", false, false),
    ("393.205", "Wheel/rim violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.207", "Suspension violation", Basic::VehicleMaintenance, 6, "393", true, false),
    ("393.209", "Steering mechanism violation", Basic::VehicleMaintenance, 8, "393", true, false),

    // Vehicle inspection/repair, 49 CFR Part 396
    ("396.3", "Unsafe operation of motor vehicle", Basic::VehicleMaintenance, 5, "396", true, false),
    ("396.3A1", "Parts/accessories not in safe condition", Basic::VehicleMaintenance, 7, "396", true, false),
    ("396.5", "Oil/grease leak hazard", Basic::VehicleMaintenance, 4, "396", false, false),
    ("396.7", "Vehicle not properly inspected/maintained", Basic::VehicleMaintenance, 4, "396", false, false),
    ("396.9", "Using defective/unsafe equipment", Basic::VehicleMaintenance, 6, "396", true, false),
    ("396.11", "DVIR violation", Basic::VehicleMaintenance, 4, "396", false, false),
    ("396.13", "Failing to correct defects noted on DVIR", Basic::VehicleMaintenance, 5, "396", false, false),
    ("396.17", "Annual inspection violation", Basic::VehicleMaintenance, 4, "396", true, false),
    ("396.19", "Inspection not performed by qualified inspector", Basic::VehicleMaintenance, 3, "396", false, false),
    ("396.21", "Periodic inspection marking violation", Basic::VehicleMaintenance, 2, "396", false, false),
    ("396.23", "Equivalent inspection not maintained", Basic::VehicleMaintenance, 3, "396", false, false),

    // Hazardous materials, 49 CFR Parts 171-180
    ("171.2", "HazMat violation", Basic::VehicleMaintenance, 7, "171", true, false),
    ("172.200", "HazMat shipping paper violation", Basic::VehicleMaintenance, 6, "172", true, false),
    ("172.300", "HazMat marking violation", Basic::VehicleMaintenance, 5, "172", false, false),
    ("172.400", "HazMat labeling violation", Basic::VehicleMaintenance, 5, "172", false, false),
    ("172.500", "HazMat placarding violation", Basic::VehicleMaintenance, 6, "172", true, false),
    ("172.600", "HazMat emergency info violation", Basic::VehicleMaintenance, 5, "172", false, false),
    ("173.24", "HazMat packaging violation", Basic::VehicleMaintenance, 6, "173", true, false),
    ("177.800", "HazMat segregation violation", Basic::VehicleMaintenance, 6, "177", true, false),
    ("177.804", "HazMat no shipping papers", Basic::VehicleMaintenance, 6, "177", true, false),
    ("177.817", "HazMat shipping papers not accessible", Basic::VehicleMaintenance, 4, "177", false, false),
    ("177.823", "HazMat movement - no placards", Basic::VehicleMaintenance, 6, "177", true, false),
    ("177.834", "HazMat loading/unloading violation", Basic::VehicleMaintenance, 5, "177", false, false),
];
