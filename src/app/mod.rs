mod about;
mod anecdote_details;
mod anecdote_list;
mod anecdotes;
mod create_new;
mod footer;
mod macros;
pub mod main;
mod menu;
mod notification;
mod theme_toggle;
