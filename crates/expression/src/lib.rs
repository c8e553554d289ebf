//! Expression and binding resolution.
//!
//! Two entry points share one lookup rule:
//! - [`resolve_variable`] takes a dotted path whose first segment names a component (by
//!   semantic id), a data source (by name), or a system global; [`resolve_string_variables`]
//!   and [`resolve_variables_in_config`] apply it to `{{...}}` templates.
//! - [`resolve_binding`] takes a structured [`DataBinding`](page_model::DataBinding) from the
//!   property panel.
//!
//! For a component, the live form state wins over declared `props`, which win over `style`.
//! Resolution never fails; an unresolvable path is `None` (or `""` inside a template).

mod binding;
mod context;
mod path;
mod variable;

#[cfg(test)]
mod test_binding;
#[cfg(test)]
mod test_variable;

pub use binding::resolve_binding;
pub use context::{ComponentStateSource, ExpressionContext, SystemGlobals};
pub use path::{get_path, value_to_string};
pub use variable::{resolve_string_variables, resolve_variable, resolve_variables_in_config};
