//! Meeting view use cases.

mod detail;
mod form;
mod list;

pub use detail::{MeetingDetail, MeetingDetailUseCase};
pub use form::MeetingFormUseCase;
pub use list::{MeetingRow, MeetingsListUseCase};
