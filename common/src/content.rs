/// Title of the block that shows the invite code.
pub const CODE_TITLE: &str = "Invitation code";

pub const COPY_LABEL: &str = "Copy";

pub const STORE_HINT: &str =
    "Go to Chrome Web Store, install the extension and use the invitation code to log in.";

/// Store listing of the browser extension.
pub const STORE_URL: &str =
    "https://chromewebstore.google.com/detail/ambire-wallet/ehgjhhccekdedpbkifaojjaefeohnoea";

pub const COPY_SUCCESS_MESSAGE: &str = "Invite code copied to clipboard";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy invite code to clipboard";

/// Which of the two fixed texts the notice shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    WithCode,
    WithoutCode,
}

/// Title and body text of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantContent {
    pub title: &'static str,
    pub text: &'static str,
}

impl DisplayVariant {
    /// An empty code counts as no code.
    pub fn from_invite_code(invite_code: Option<&str>) -> Self {
        match invite_code {
            Some(code) if !code.is_empty() => DisplayVariant::WithCode,
            _ => DisplayVariant::WithoutCode,
        }
    }

    pub fn content(self) -> VariantContent {
        match self {
            DisplayVariant::WithCode => VariantContent {
                title: "By using this version of Ambire you don’t receive XP in Ambire Legends",
                text: "Migrate to the Ambire extension now and get airdrop:",
            },
            DisplayVariant::WithoutCode => VariantContent {
                title: "This version of Ambire is no longer under active development",
                text: "To receive Legends XP, continue using your Ambire extension now",
            },
        }
    }

    pub fn title(self) -> &'static str {
        self.content().title
    }

    pub fn text(self) -> &'static str {
        self.content().text
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DisplayVariant::WithCode => "with-code",
            DisplayVariant::WithoutCode => "without-code",
        }
    }
}
