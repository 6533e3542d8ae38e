pub mod dashboard;
pub mod login_form;
pub mod period_row;
pub mod report_form;
pub mod result_table;
pub mod status;
pub mod team_selector;

pub use dashboard::Dashboard;
pub use login_form::LoginForm;
