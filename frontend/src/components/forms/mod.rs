pub mod compose_message_form;
