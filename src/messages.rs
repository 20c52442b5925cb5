//! Static reply copy for the assistant, pulled together in one place
//! so the wording stays consistent across intents.

/// Reply text builder for the assistant's fixed phrasing.
pub struct ReplyCopy;

impl ReplyCopy {
    /// Greeting shown for "hi" / "hello" / "hey".
    pub const GREETING: &'static str = "Hello. How can I help you today?\n\n\
         You can ask about:\n\
         Departments\nDoctors\nSkin issue\nHeart problem\nChild doctor";

    /// Suggestion shown when no intent matched.
    pub const FALLBACK: &'static str = "I can help you find the right doctor.\n\n\
         Try typing:\n\
         Departments\nDoctors\nSkin issue\nHeart problem\nChild doctor";

    /// Header for the full department listing.
    pub const DEPARTMENT_LIST_TITLE: &'static str = "Departments at Mallika Hospital";

    /// Header line above a department-filtered doctor list.
    pub fn doctors_available_in(department_name: &str) -> String {
        format!("Doctors available in {}:", department_name)
    }
}
