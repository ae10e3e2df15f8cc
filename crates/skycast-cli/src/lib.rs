//! Turn orchestration and terminal interface for SkyCast

mod assistant;
mod conversation;
mod quick_answer;
mod ui;


pub use assistant::{Assistant, Reply, ReplySource};
pub use conversation::{Conversation, ConversationTurn, SUGGESTED_QUESTIONS};
pub use quick_answer::QuickAnswerProvider;
pub use ui::{
    display_banner, handle_input_with_history, print_help, print_reply, print_suggestions,
    print_transcript,
};

// Re-export core types
pub use skycast_core::{Error, Result};
