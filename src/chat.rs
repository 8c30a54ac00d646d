
//! Chat-style conversion sessions: a transcript of role-tagged
//! messages and the responder that answers free-text requests.

use crate::parsing::parse_request;
use crate::units::aliases::{AliasTable, default_alias_table};
use crate::units::table::{UnitTable, default_units_table};

use serde::{Serialize, Deserialize};

/// Fixed reply when the input did not contain a conversion request.
pub const USAGE_HINT: &str = "Please ask like: 'Convert 10 feet to inches'";

/// Fixed reply when a request named units missing from the table.
pub const UNKNOWN_UNITS: &str = "Sorry, I couldn't find these units. Try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: Role,
  pub content: String,
}

/// One interactive conversation: an append-only, ordered transcript
/// of role-tagged messages. A session is created when the chat
/// surface starts and dropped when it ends; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
  messages: Vec<ChatMessage>,
}

impl ChatSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push_user(&mut self, content: impl Into<String>) {
    self.messages.push(ChatMessage { role: Role::User, content: content.into() });
  }

  pub fn push_assistant(&mut self, content: impl Into<String>) {
    self.messages.push(ChatMessage { role: Role::Assistant, content: content.into() });
  }

  pub fn messages(&self) -> &[ChatMessage] {
    &self.messages
  }
}

/// Answers free-text conversion requests against a unit table and its
/// alias table. The responder itself is stateless between requests;
/// conversation history lives in a [`ChatSession`] held by the
/// caller.
#[derive(Debug, Clone)]
pub struct Responder {
  units: UnitTable,
  aliases: AliasTable,
}

impl Responder {
  pub fn new(units: UnitTable, aliases: AliasTable) -> Self {
    Self { units, aliases }
  }

  pub fn with_default_tables() -> Self {
    Self::new(default_units_table(), default_alias_table())
  }

  pub fn units(&self) -> &UnitTable {
    &self.units
  }

  pub fn aliases(&self) -> &AliasTable {
    &self.aliases
  }

  /// Computes the reply for one chat message.
  ///
  /// There are three outcomes: no conversion request in the sentence
  /// (usage hint), a request naming units absent from the table
  /// (fixed apology), or a successful conversion formatted to five
  /// decimal places.
  pub fn respond(&self, sentence: &str) -> String {
    let request = match parse_request(&self.aliases, sentence) {
      Some(request) => request,
      None => return USAGE_HINT.to_owned(),
    };
    let (from, to) = match (self.units.get(&request.from), self.units.get(&request.to)) {
      (Ok(from), Ok(to)) => (from, to),
      _ => return UNKNOWN_UNITS.to_owned(),
    };
    let result = self.units.convert(request.value, from, to);
    format!("{} {} is equal to {:.5} {}", request.value, from.name(), result, to.name())
  }

  /// Runs one request/response exchange against a session transcript:
  /// appends the user message, computes the reply, and appends it as
  /// the assistant message.
  pub fn exchange(&self, session: &mut ChatSession, input: &str) -> String {
    session.push_user(input);
    let reply = self.respond(input);
    log::debug!("chat exchange: {:?} -> {:?}", input, reply);
    session.push_assistant(reply.clone());
    reply
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_respond_success() {
    let responder = Responder::with_default_tables();
    let reply = responder.respond("Convert 10 feet to inches");
    assert_eq!(reply, "10 foot is equal to 120.00000 inch");
  }

  #[test]
  fn test_respond_success_via_aliases() {
    let responder = Responder::with_default_tables();
    let reply = responder.respond("how far is 2.5 Km to m");
    assert_eq!(reply, "2.5 kilometer is equal to 2500.00000 meter");
  }

  #[test]
  fn test_respond_no_match() {
    let responder = Responder::with_default_tables();
    assert_eq!(responder.respond("banana"), USAGE_HINT);
  }

  #[test]
  fn test_respond_unknown_units() {
    let responder = Responder::with_default_tables();
    assert_eq!(responder.respond("Convert 5 zz to inches"), UNKNOWN_UNITS);
  }

  #[test]
  fn test_exchange_appends_transcript_in_order() {
    let responder = Responder::with_default_tables();
    let mut session = ChatSession::new();
    responder.exchange(&mut session, "Convert 10 feet to inches");
    responder.exchange(&mut session, "banana");
    let messages = session.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Convert 10 feet to inches");
    assert_eq!(messages[1].role, Role::Assistant);
    assert!(messages[1].content.contains("120.00000"));
    assert_eq!(messages[2].content, "banana");
    assert_eq!(messages[3].content, USAGE_HINT);
  }

  #[test]
  fn test_message_serialization() {
    let message = ChatMessage {
      role: Role::Assistant,
      content: "10 foot is equal to 120.00000 inch".to_owned(),
    };
    let json = serde_json::to_string(&message).expect("serializable message");
    assert!(json.contains("\"assistant\""));
    assert!(json.contains("120.00000"));
    let back: ChatMessage = serde_json::from_str(&json).expect("deserializable message");
    assert_eq!(back, message);
  }
}
