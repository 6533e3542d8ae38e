pub mod use_export;
pub mod use_invoices;
pub mod use_session;
pub mod use_team_preference;
pub mod use_teams;
