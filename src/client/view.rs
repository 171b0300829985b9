//! Page visibility as a function of a single view state.

use uuid::Uuid;

use super::session::SessionStore;

/// Page sections; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    SignUp,
    MemberPortfolio,
    Upload,
    Update,
    Delete,
    ViewMore,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Landing,
        Page::Login,
        Page::SignUp,
        Page::MemberPortfolio,
        Page::Upload,
        Page::Update,
        Page::Delete,
        Page::ViewMore,
    ];

    /// DOM id of the section.
    pub fn section_id(self) -> &'static str {
        match self {
            Page::Landing => "landingPage",
            Page::Login => "loginPage",
            Page::SignUp => "signUpPage",
            Page::MemberPortfolio => "projectPage",
            Page::Upload => "uploadPortfolioPage",
            Page::Update => "updatePortfolioPage",
            Page::Delete => "deletePortfolioPage",
            Page::ViewMore => "viewMorePage",
        }
    }

    /// Pages that only make sense for a logged-in member.
    pub fn requires_login(self) -> bool {
        matches!(
            self,
            Page::MemberPortfolio | Page::Upload | Page::Update | Page::Delete
        )
    }
}

/// Navigation bar controls whose visibility follows the login state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Logout,
    MyPortfolio,
    Login,
    SignUp,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Logout,
        Control::MyPortfolio,
        Control::Login,
        Control::SignUp,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Control::Logout => "logoutBtn",
            Control::MyPortfolio => "myPortfolioBtn",
            Control::Login => "loginBtn",
            Control::SignUp => "signUpBtn",
        }
    }

    fn for_members(self) -> bool {
        matches!(self, Control::Logout | Control::MyPortfolio)
    }
}

/// User-driven navigation and the lifecycle events that move between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    ShowLogin,
    ShowSignUp,
    ShowMyPortfolio,
    ShowUpload,
    BackToPortfolio,
    ShowUpdate,
    ShowDelete,
    ViewPortfolio(Uuid),
    BackToLanding,
    LoggedIn { username: String },
    LoggedOut,
    PortfolioUploaded,
}

/// Work the controller must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadLandingCards,
    LoadMyPortfolios,
    LoadAccountInfo,
    LoadPortfolioDetail(Uuid),
    RememberCurrentPortfolio(Uuid),
    ForgetCurrentPortfolio,
    ClearSession,
    ScrollToTop,
}

/// The single source of truth for what the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: Page,
    member: Option<String>,
}

impl ViewState {
    /// Initial state at page load: always the landing page, with the identity
    /// taken from session storage.
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            page: Page::Landing,
            member: session.username().map(str::to_string),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Name shown in the navigation bar while logged in.
    pub fn member_name(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.member.is_some()
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn is_control_visible(&self, control: Control) -> bool {
        control.for_members() == self.is_logged_in()
    }

    /// Every page section with its visibility.
    pub fn sections(&self) -> impl Iterator<Item = (Page, bool)> + '_ {
        Page::ALL.into_iter().map(|page| (page, self.is_visible(page)))
    }

    /// Every navigation control with its visibility.
    pub fn controls(&self) -> impl Iterator<Item = (Control, bool)> + '_ {
        Control::ALL
            .into_iter()
            .map(|control| (control, self.is_control_visible(control)))
    }

    /// Apply a navigation and return the effects it triggers.
    pub fn apply(&mut self, navigation: Navigation) -> Vec<Effect> {
        match navigation {
            Navigation::Home => self.go(Page::Landing, Vec::new()),
            Navigation::ShowLogin => self.go(Page::Login, Vec::new()),
            Navigation::ShowSignUp => self.go(Page::SignUp, Vec::new()),
            Navigation::ShowMyPortfolio | Navigation::BackToPortfolio => self.go(
                Page::MemberPortfolio,
                vec![Effect::LoadMyPortfolios, Effect::LoadAccountInfo],
            ),
            Navigation::ShowUpload => self.go(Page::Upload, Vec::new()),
            Navigation::ShowUpdate => self.go(Page::Update, Vec::new()),
            Navigation::ShowDelete => self.go(Page::Delete, Vec::new()),
            Navigation::ViewPortfolio(id) => self.go(
                Page::ViewMore,
                vec![
                    Effect::LoadPortfolioDetail(id),
                    Effect::RememberCurrentPortfolio(id),
                    Effect::ScrollToTop,
                ],
            ),
            Navigation::BackToLanding => {
                self.go(Page::Landing, vec![Effect::ForgetCurrentPortfolio])
            }
            Navigation::LoggedIn { username } => {
                self.member = Some(username);
                self.go(Page::Landing, vec![Effect::ScrollToTop])
            }
            Navigation::LoggedOut => {
                self.member = None;
                self.go(
                    Page::Landing,
                    vec![Effect::ClearSession, Effect::LoadLandingCards],
                )
            }
            Navigation::PortfolioUploaded => self.go(
                Page::Landing,
                vec![Effect::LoadLandingCards, Effect::ScrollToTop],
            ),
        }
    }

    fn go(&mut self, page: Page, effects: Vec<Effect>) -> Vec<Effect> {
        if page.requires_login() && !self.is_logged_in() {
            self.page = Page::Login;
            return Vec::new();
        }

        self.page = page;
        effects
    }
}
