pub mod form_state;
pub mod lifestyle;
pub mod metric;
pub mod sleep;
pub mod subject;
