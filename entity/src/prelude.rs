pub use super::comment::Entity as Comment;
pub use super::feedback::Entity as Feedback;
pub use super::feedback_content::Entity as FeedbackContent;
pub use super::feedback_cycle::Entity as FeedbackCycle;
pub use super::goal::Entity as Goal;
pub use super::organization::Entity as Organization;
pub use super::organizational_hierarchy::Entity as OrganizationalHierarchy;
pub use super::rating::Entity as Rating;
pub use super::review_template::Entity as ReviewTemplate;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
