//! Per-visit coaching state: profile, protected categories and transcript.
//! Lives behind a reducer so late network replies append to whatever the
//! transcript is when they land.

use crate::models::{CoachInsights, SessionStart, SpendCategory, UserProfile, VideoGuide};
use crate::preferences::{self, ProtectedSet};
use std::rc::Rc;
use yew::Reducible;

pub const APOLOGY: &str = "I'm having trouble responding right now. Please try again.";
pub const INSIGHTS_INTRO: &str = "Based on our conversation, here are my insights:";
pub const VIDEO_READY: &str = "Your personalized financial guide is ready!";

#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    Text,
    Reply { progress: f64 },
    Insights(CoachInsights),
    Video(VideoGuide),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Speaker {
    Coach,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: String,
    pub body: MessageBody,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoachSession {
    pub profile: UserProfile,
    pub session_id: Option<String>,
    pub protected: ProtectedSet,
    pub messages: Vec<ChatMessage>,
    pub progress: f64,
    pub busy: bool,
}

pub enum SessionAction {
    EditProfile(UserProfile),
    ToggleProtected(SpendCategory),
    Busy(bool),
    Started { start: SessionStart, at: String },
    UserSaid { text: String, at: String },
    CoachReplied { text: String, progress: f64, at: String },
    ReplyFailed { at: String },
    InsightsReady { insights: CoachInsights, at: String },
    VideoReady { guide: VideoGuide, at: String },
    Reset,
}

impl CoachSession {
    pub fn is_active(&self) -> bool {
        self.session_id.is_some()
    }

    fn coach(&mut self, content: &str, body: MessageBody, at: String) {
        self.messages.push(ChatMessage {
            speaker: Speaker::Coach,
            content: content.to_string(),
            body,
            timestamp: at,
        });
    }

    pub fn apply(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::EditProfile(profile) => self.profile = profile,
            SessionAction::ToggleProtected(category) => {
                self.protected = preferences::toggle(&self.protected, category);
            }
            SessionAction::Busy(busy) => self.busy = busy,
            SessionAction::Started { start, at } => {
                let seeded = preferences::protected_from_profession(&self.profile.profession);
                self.protected.extend(seeded);
                self.session_id = Some(start.session_id);
                self.messages = Vec::new();
                self.coach(&start.welcome_message, MessageBody::Text, at.clone());
                self.coach(&start.first_question, MessageBody::Text, at);
                self.progress = 0.0;
            }
            SessionAction::UserSaid { text, at } => {
                self.protected = preferences::protected_from_text(&text, &self.protected);
                self.messages.push(ChatMessage {
                    speaker: Speaker::User,
                    content: text,
                    body: MessageBody::Text,
                    timestamp: at,
                });
            }
            SessionAction::CoachReplied { text, progress, at } => {
                self.progress = progress;
                self.coach(&text, MessageBody::Reply { progress }, at);
            }
            SessionAction::ReplyFailed { at } => self.coach(APOLOGY, MessageBody::Text, at),
            SessionAction::InsightsReady { insights, at } => {
                self.coach(INSIGHTS_INTRO, MessageBody::Insights(insights), at);
            }
            SessionAction::VideoReady { guide, at } => {
                self.coach(VIDEO_READY, MessageBody::Video(guide), at);
            }
            SessionAction::Reset => return CoachSession::default(),
        }
        self
    }
}

impl Reducible for CoachSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

pub fn now_label() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(profession: &str) -> CoachSession {
        CoachSession::default()
            .apply(SessionAction::EditProfile(UserProfile {
                name: "Alex".into(),
                age: "29".into(),
                profession: profession.into(),
            }))
            .apply(SessionAction::Started {
                start: SessionStart {
                    session_id: "s-1".into(),
                    welcome_message: "Hi Alex!".into(),
                    first_question: "How do you feel about money?".into(),
                },
                at: "9:00:00 AM".into(),
            })
    }

    #[test]
    fn start_posts_welcome_and_first_question() {
        let session = started("Nurse");
        assert!(session.is_active());
        let texts: Vec<&str> = session.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, vec!["Hi Alex!", "How do you feel about money?"]);
        assert!(session.protected.is_empty());
    }

    #[test]
    fn start_seeds_protection_from_profession() {
        let session = CoachSession::default()
            .apply(SessionAction::ToggleProtected(SpendCategory::Other))
            .apply(SessionAction::EditProfile(UserProfile {
                name: "Sam".into(),
                age: String::new(),
                profession: "Musician".into(),
            }))
            .apply(SessionAction::Started {
                start: SessionStart {
                    session_id: "s-2".into(),
                    welcome_message: "Welcome".into(),
                    first_question: "First?".into(),
                },
                at: "now".into(),
            });
        assert!(session.protected.contains(&SpendCategory::Entertainment));
        assert!(session.protected.contains(&SpendCategory::Other));
    }

    #[test]
    fn user_text_updates_protection_before_reply() {
        let session = started("Nurse").apply(SessionAction::UserSaid {
            text: "I never want to give up festival tickets".into(),
            at: "9:01:00 AM".into(),
        });
        assert!(session.protected.contains(&SpendCategory::Entertainment));
        assert_eq!(session.messages.last().unwrap().speaker, Speaker::User);
    }

    #[test]
    fn failed_reply_appends_apology() {
        let session = started("Nurse")
            .apply(SessionAction::UserSaid {
                text: "hello".into(),
                at: "t".into(),
            })
            .apply(SessionAction::ReplyFailed { at: "t".into() });
        assert_eq!(session.messages.len(), 4);
        assert_eq!(session.messages.last().unwrap().content, APOLOGY);
        assert_eq!(session.progress, 0.0);
    }

    #[test]
    fn reply_records_progress() {
        let session = started("Nurse").apply(SessionAction::CoachReplied {
            text: "Tell me more.".into(),
            progress: 0.6,
            at: "t".into(),
        });
        assert_eq!(session.progress, 0.6);
        assert_eq!(
            session.messages.last().unwrap().body,
            MessageBody::Reply { progress: 0.6 }
        );
    }

    #[test]
    fn reset_clears_everything() {
        let session = started("DJ")
            .apply(SessionAction::Busy(true))
            .apply(SessionAction::Reset);
        assert_eq!(session, CoachSession::default());
        assert!(!session.is_active());
    }
}
