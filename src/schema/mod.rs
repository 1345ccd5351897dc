pub mod checks;
pub mod datasets;
pub mod model;
pub mod validate;

pub use datasets::schema_for;
pub use model::{Check, DatasetKind, Field, FieldSpec, FieldType, KeyKind, Schema};
pub use validate::{
    validate, ValidationDiagnostic, ValidationReport, ValidationSeverity, ViolationKind,
};
