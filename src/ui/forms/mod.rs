//! Form rendering module
//!
//! One submodule per wizard step:
//! - `personal_info`: name and email inputs
//! - `program_form`: program catalog radio list
//! - `upload_form`: attachment path input and selected file card

mod field_renderer;
mod personal_info;
mod program_form;
mod upload_form;

pub use personal_info::draw as draw_personal_info;
pub use program_form::draw as draw_program_selection;
pub use upload_form::draw as draw_document_upload;
