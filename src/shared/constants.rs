// =============================================================================
// DISPATCH CATALOGS
// =============================================================================

/// Disaster categories offered on the report submission form.
/// Advisory only: the report store accepts any non-empty type.
pub const DISASTER_TYPES: [&str; 5] = ["Hurricane", "Fire", "Earthquake", "Landslide", "Flood"];

/// Departments a coordinator can dispatch tasks to.
/// Advisory only: the task store accepts any non-empty department.
pub const DEPARTMENTS: [&str; 9] = [
    "Evacuation Department",
    "Search and Rescue team",
    "Public Health Services",
    "Damage Assessment",
    "Infrastructure Restoration",
    "Debris Removal",
    "Fire Department",
    "Water Supply Department",
    "Hospital",
];
