pub mod validation;

pub use validation::{
    validate_employee_id, validate_job_title, validate_name, validate_summary, validate_year,
    YEAR_MAX, YEAR_MIN,
};
