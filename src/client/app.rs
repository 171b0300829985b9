use std::collections::BTreeMap;

use chrono::Utc;

use super::api::{ApiClient, ClientError};
use super::render;
use super::session::{CURRENT_PORTFOLIO, SessionStore};
use super::view::{Effect, Navigation, ViewState};
use crate::models::comments::{self, CreateComment};
use crate::models::members::{LoginMember, MemberResponse, RegisterMember};
use crate::models::portfolio::{self, CreatePortfolio, PriceFilter};

/// Page regions whose HTML is produced by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fragment {
    MemberName,
    MembersCards,
    MemberAccount,
    MyProjectCards,
    ArtsDeck,
    ViewMoreArtInfo,
    ViewMoreComments,
}

impl Fragment {
    pub fn element_id(self) -> &'static str {
        match self {
            Fragment::MemberName => "memberName",
            Fragment::MembersCards => "membersCards",
            Fragment::MemberAccount => "memberAccount",
            Fragment::MyProjectCards => "myProjectCards",
            Fragment::ArtsDeck => "artsDeck",
            Fragment::ViewMoreArtInfo => "viewMorePage-artInfo",
            Fragment::ViewMoreComments => "viewMorePage-comments",
        }
    }
}

/// The client application: view state, session storage and rendered fragments
/// kept in step with the API.
pub struct ClientApp {
    api: ApiClient,
    session: SessionStore,
    view: ViewState,
    fragments: BTreeMap<Fragment, String>,
    /// Comments of the portfolio open on the detail page.
    thread: Vec<comments::Model>,
    scroll_requested: bool,
}

impl ClientApp {
    /// Build the app from an existing session without touching the network.
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        let view = ViewState::from_session(&session);
        let mut fragments = BTreeMap::new();
        if let Some(name) = view.member_name() {
            fragments.insert(Fragment::MemberName, render::member_name(name));
        }

        Self {
            api,
            session,
            view,
            fragments,
            thread: Vec::new(),
            scroll_requested: false,
        }
    }

    /// Load `config.json`, then the landing feed. No API call happens before the config is known.
    pub async fn start(config_url: &str, session: SessionStore) -> Result<Self, ClientError> {
        let api = ApiClient::from_config_url(config_url).await?;
        let mut app = Self::new(api, session);
        app.run(Effect::LoadLandingCards).await?;
        Ok(app)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn fragment(&self, fragment: Fragment) -> Option<&str> {
        self.fragments.get(&fragment).map(String::as_str)
    }

    /// Whether a transition asked for the page to scroll up; resets the flag.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    /// Apply a navigation and run every effect it produces.
    pub async fn navigate(&mut self, navigation: Navigation) -> Result<(), ClientError> {
        tracing::debug!(?navigation, "navigate");
        for effect in self.view.apply(navigation) {
            self.run(effect).await?;
        }
        Ok(())
    }

    pub async fn show_members(&mut self) -> Result<(), ClientError> {
        let members = self.api.all_members().await?;
        self.fragments
            .insert(Fragment::MembersCards, render::members_list(&members));
        Ok(())
    }

    /// Register, then send the visitor to the login page.
    pub async fn register(&mut self, input: &RegisterMember) -> Result<MemberResponse, ClientError> {
        let member = self.api.register(input).await?;
        self.navigate(Navigation::ShowLogin).await?;
        Ok(member)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let login = self
            .api
            .login(&LoginMember {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.session.remember_login(&login);
        self.fragments.insert(
            Fragment::MemberName,
            render::member_name(&login.member.username),
        );
        self.navigate(Navigation::LoggedIn {
            username: login.member.username,
        })
        .await
    }

    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.navigate(Navigation::LoggedOut).await
    }

    /// Upload a portfolio as the logged-in member and return to the refreshed feed.
    pub async fn upload(&mut self, input: &CreatePortfolio) -> Result<portfolio::Model, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotLoggedIn)?;
        let item = self.api.add_portfolio(token, input).await?;
        self.navigate(Navigation::PortfolioUploaded).await?;
        Ok(item)
    }

    /// Replace the feed with the filter results, or the no-match message.
    pub async fn apply_filter(&mut self, filter: &PriceFilter) -> Result<usize, ClientError> {
        let items = self.api.filter_portfolios(filter).await?;
        let html = if items.is_empty() {
            render::no_match()
        } else {
            render::product_cards(&items)
        };
        self.fragments.insert(Fragment::ArtsDeck, html);
        Ok(items.len())
    }

    /// Post a comment on the portfolio currently open and re-render its thread.
    pub async fn post_comment(&mut self, content: &str) -> Result<comments::Model, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotLoggedIn)?;
        let portfolio_id = self
            .session
            .current_portfolio()
            .ok_or(ClientError::NoCurrentPortfolio)?;

        let input = CreateComment {
            portfolio_id,
            post_by_id: self.session.member_id(),
            post_by_username: self.session.username().map(str::to_string),
            post_date: Some(Utc::now().timestamp_millis()),
            content: content.to_string(),
        };
        let comment = self.api.add_comment(token, &input).await?;

        self.thread.push(comment.clone());
        self.render_thread();

        Ok(comment)
    }

    async fn run(&mut self, effect: Effect) -> Result<(), ClientError> {
        match effect {
            Effect::LoadLandingCards => {
                let items = self.api.portfolios_with_authors().await?;
                self.fragments
                    .insert(Fragment::ArtsDeck, render::product_cards(&items));
            }
            Effect::LoadMyPortfolios => {
                let Some(member_id) = self.session.member_id() else {
                    return Ok(());
                };
                let items = self.api.member_portfolios(member_id).await?;
                self.fragments
                    .insert(Fragment::MyProjectCards, render::my_portfolio_cards(&items));
            }
            Effect::LoadAccountInfo => {
                let (Some(member_id), Some(token)) = (self.session.member_id(), self.session.token())
                else {
                    return Ok(());
                };
                let account = self.api.account_info(token, member_id).await?;
                self.fragments
                    .insert(Fragment::MemberAccount, render::account_summary(&account));
            }
            Effect::LoadPortfolioDetail(id) => {
                let detail = self.api.portfolio_detail(id).await?;
                self.fragments
                    .insert(Fragment::ViewMoreArtInfo, render::portfolio_detail(&detail));
                self.thread = detail.comments;
                self.render_thread();
            }
            Effect::RememberCurrentPortfolio(id) => {
                self.session.set(CURRENT_PORTFOLIO, id.to_string());
            }
            Effect::ForgetCurrentPortfolio => {
                self.session.remove(CURRENT_PORTFOLIO);
                self.thread.clear();
            }
            Effect::ClearSession => {
                self.session.clear();
                self.fragments.clear();
                self.thread.clear();
            }
            Effect::ScrollToTop => self.scroll_requested = true,
        }
        Ok(())
    }

    fn render_thread(&mut self) {
        let html = render::comment_thread(&self.thread, self.session.username());
        self.fragments.insert(Fragment::ViewMoreComments, html);
    }
}
