pub mod student_form;
