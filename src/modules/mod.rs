pub mod job_normalization;
