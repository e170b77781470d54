pub mod attendance_view;
pub mod change_password_modal;
pub mod child_selector_menu;
pub mod dashboard_view;
pub mod feedback;
pub mod fees_view;
pub mod forms;
pub mod grades_view;
pub mod header;
pub mod login_form;
pub mod messages_view;
pub mod reports_view;
pub mod student_info_view;
pub mod teachers_view;
pub mod timetable_view;
