pub mod employment_type;
pub mod experience_level;
pub mod remote_type;
pub mod salary_info;

pub use employment_type::EmploymentType;
pub use experience_level::ExperienceLevel;
pub use remote_type::RemoteType;
pub use salary_info::{SalaryInfo, SalaryPeriod, DEFAULT_CURRENCY};
