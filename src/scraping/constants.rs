// upstream feed
pub const BASE_URL: &str =
    "https://my.uscis.gov/appointmentscheduler-appointment/field-offices/state/CA";

pub const OUTPUT_FILE: &str = "appointments.json";

// Bay Area field offices
pub const TARGET_CITIES: [&str; 3] = ["San Jose", "San Francisco", "Oakland"];

// "2025-10-05 09:00", used both for parsing slots and for the report
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// environment keys
pub const URL_ENV: &str = "USCIS_API_URL";
pub const OUTPUT_ENV: &str = "APPOINTMENTS_OUTPUT";
pub const CITIES_ENV: &str = "TARGET_CITIES";
pub const CUTOFF_ENV: &str = "CUTOFF_DATE";
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
