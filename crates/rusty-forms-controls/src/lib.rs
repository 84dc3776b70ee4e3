// rusty-forms-controls - Server-side HTML form controls
// Rendering, submission reconciliation, change detection and validation

pub mod cleaner;
pub mod config;
pub mod control;
pub mod error;
pub mod form;
pub mod formatter;
pub mod html;
pub mod obfuscator;
pub mod submitted;
pub mod validation;
pub mod validator;
pub mod value;
pub mod walker;

// Re-export core types
pub use cleaner::{Cleaner, DateCleaner, PruneWhitespaceCleaner, TrimWhitespaceCleaner};
pub use config::{FormConfig, FormsConfig, HtmlConfig, ObfuscatorConfig};
pub use control::{
    Control, ControlKind, ControlOption, InputType, LabelPosition, OptionFields, OptionGroup,
};
pub use error::{FormError, FormResult};
pub use form::{Form, Outcome};
pub use formatter::{DecimalFormatter, Formatter};
pub use html::{AttrValue, Attributes, IdGenerator};
pub use obfuscator::{Obfuscator, ReferenceObfuscator};
pub use submitted::{from_fields, parse_form_body};
pub use validation::ValidationResult;
pub use validator::{
    DateValidator, EmailValidator, HttpValidator, IntegerValidator, LengthValidator,
    MandatoryValidator, Validator,
};
pub use value::{Map, Value};
pub use walker::{LoadResult, LoadWalker};

// Re-export Maud for callers embedding forms in templates
pub use maud::{Markup, PreEscaped};
