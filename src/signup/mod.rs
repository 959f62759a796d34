pub mod controller;
pub use self::controller::{FormController, Rejection, SubmitStatus};

pub mod fields;
pub use self::fields::{Field, FieldError, SignUpInput};

pub mod strength;
pub use self::strength::{classify, StrengthLabel, Tone};

pub mod submit;
pub use self::submit::{LogSubmitter, Submitter};

pub mod validator;
pub use self::validator::{validate, ValidationResult};
