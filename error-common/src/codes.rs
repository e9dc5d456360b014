//! Stable codes surfaced to callers alongside error messages

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
}

pub mod configuration {
    pub const INVALID_VALUE: &str = "CONFIG_2001";
}

pub mod external {
    pub const CLASSIFIER_UNAVAILABLE: &str = "EXTERNAL_3001";
}

pub mod dataset {
    pub const LOAD_FAILED: &str = "DATASET_5001";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}
