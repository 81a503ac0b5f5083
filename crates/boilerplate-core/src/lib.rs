// Core modules
pub mod archetype;
pub mod error;
pub mod materialize;
pub mod params;
pub mod repository;
pub mod resolve;
pub mod shaper;
pub mod template;

// Re-export commonly used types
pub use archetype::{is_valid_archetype, list_archetypes, Archetype};
pub use error::{BoilerplateError, Result};
pub use materialize::{
    materialize, CollisionPolicy, LocalFs, MaterializeConfig, MaterializeReport, Materializer,
    MemoryFs, OutputFs,
};
pub use params::{ParamSpec, ParameterDictionary};
pub use repository::{DirRepository, EmbeddedRepository, TemplateRepository};
