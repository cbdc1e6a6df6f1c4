mod alert;
mod button;
mod confirm;
mod field;
mod load_error;
mod page_header;
mod pager;
mod rich_text;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use confirm::ConfirmDelete;
pub(crate) use field::{Checkbox, SelectField, TextArea, TextField};
pub(crate) use load_error::LoadError;
pub(crate) use page_header::PageHeader;
pub(crate) use pager::Pager;
pub(crate) use rich_text::RichText;
pub(crate) use spinner::Spinner;
