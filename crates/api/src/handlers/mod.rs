pub mod admin_templates;
pub mod projects;
pub mod templates;
