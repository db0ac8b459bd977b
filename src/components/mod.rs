pub mod accounts;
pub mod ai_coach;
pub mod capcoach;
pub mod cards;
pub mod icons;
pub mod layout;
pub mod transactions;
