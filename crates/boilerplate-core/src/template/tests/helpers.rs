//! Test helper functions for template engine tests

use crate::params::ParameterDictionary;

/// Parameters shared by most engine tests
pub(super) fn project_params() -> ParameterDictionary {
    ParameterDictionary::new()
        .with("ProjectName", "demo-svc")
        .with("ProjectPackage", "example.com/demo-svc")
        .with("ProjectPackageName", "demosvc")
        .with("DefaultServerPort", 8080)
        .with("Metrics", true)
        .with("Ratio", 0.5)
}
