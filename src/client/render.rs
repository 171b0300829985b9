//! HTML fragments written into the page.
//!
//! Every interpolated value goes through `html_escape`; attribute values use the
//! double-quoted attribute encoder.

use chrono::{DateTime, Datelike, Timelike, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::models::comments;
use crate::models::members::MemberResponse;
use crate::models::portfolio::{self, PortfolioDetail, PortfolioWithAuthor};

pub const NO_MATCH_MESSAGE: &str = "Sorry, there is no artwork that matches your search!";
pub const NO_PORTFOLIO_MESSAGE: &str = "You have not upload any project yet!";
pub const NO_COMMENTS_MESSAGE: &str = "There has not been any question about this artwork";

/// `day/month/year at hour:minute`, month counted from 1.
pub fn format_date(date: DateTime<Utc>) -> String {
    format!(
        "{}/{}/{} at {}:{:02}",
        date.day(),
        date.month(),
        date.year(),
        date.hour(),
        date.minute()
    )
}

pub fn member_name(name: &str) -> String {
    format!("<b>{}</b>", text(name))
}

pub fn members_list(members: &[MemberResponse]) -> String {
    let mut html = String::from(r#"<h2 class="pt-5 pb-4">All Members</h2>"#);
    for member in members {
        html.push_str(&format!(
            r#"<div class="col mt-3"><h4>{}</h4></div>"#,
            text(&member.username)
        ));
    }
    html
}

pub fn account_summary(account: &MemberResponse) -> String {
    let row = |label: &str, value: &str, tag: &str| {
        format!(
            r#"<div class="flexContainer-flexStart mb-1"><strong class="userInfoField">{label}:</strong><{tag}>{}</{tag}></div>"#,
            text(value)
        )
    };

    [
        row("Username", &account.username, "div"),
        row("Email", &account.email, "div"),
        row("About", account.about.as_deref().unwrap_or_default(), "div"),
        row("Location", account.location.as_deref().unwrap_or_default(), "div"),
        row("Website", account.website.as_deref().unwrap_or_default(), "a"),
    ]
    .concat()
}

/// Cards on the member's own portfolio page, or the empty-state message.
pub fn my_portfolio_cards(items: &[portfolio::Model]) -> String {
    if items.is_empty() {
        return format!(r#"<div class="noPortfolio text-center">{NO_PORTFOLIO_MESSAGE}</div>"#);
    }

    items
        .iter()
        .map(|item| {
            let id = item.id.to_string();
            format!(
                r#"<div class="card portfolioCard border-bottom"><div style="background-image:url({image})" class="portfolioPage-image mb-3"></div><h5 class="card-text mb-3">{title}</h5><div class="portfolioPage-buttonsWrapper"><div class="portfolioPage-buttonGroup"><div class="button viewMoreButton btn-font" id="{id}">View</div><div class="button-black editButton btn-font" id="{id}">Edit</div></div><div class="button-red deleteButton btn-font" id="{id}">Delete</div></div></div>"#,
                image = attr(&item.image),
                title = text(&item.title),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cards on the landing page feed.
pub fn product_cards(items: &[PortfolioWithAuthor]) -> String {
    items
        .iter()
        .map(|art| {
            let author = &art.author_info;
            format!(
                r#"<div class="col-sm-12 col-md-6 col-lg-4 my-xs-1 my-sm-1 my-md-3 my-lg-3"><div class="card card-border rounded-0 mb-4"><img src="{image}" alt="Avatar" class="card-img-top radius"><div class="card-body artcard-body mx-1 my-1"><div class="artcard-columnwrap"><h4 class="card-title artcard-title mb-3">{title}</h4><h5 class="card-title artcard-price">&dollar;{price}</h5></div><p class="card-title"><b>{username}, {location}</b></p><p class="mb-3 text-truncate">{description}</p><a href="{website}" class="card-link artcard-link">Artist Website</a><div class="artcard-columnwrap mt-4"><p class="card-title h5-cyan">{category}</p><div class="button viewMoreButton btn-font" id="{id}">View</div></div></div></div></div>"#,
                image = attr(&art.portfolio.image),
                title = text(&art.portfolio.title),
                price = art.portfolio.price,
                username = text(&author.username),
                location = text(author.location.as_deref().unwrap_or_default()),
                description = text(&art.portfolio.description),
                website = attr(author.website.as_deref().unwrap_or_default()),
                category = text(&art.portfolio.category),
                id = art.portfolio.id,
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shown in place of the feed when a filter matches nothing.
pub fn no_match() -> String {
    format!(
        r#"<div class="noResultText-wrapper"><h3 class="noResultText">{NO_MATCH_MESSAGE}</h3></div>"#
    )
}

/// The artwork half of the detail page.
pub fn portfolio_detail(detail: &PortfolioDetail) -> String {
    let item = &detail.portfolio;
    let author = &detail.author_info;
    let website = author.website.as_deref().unwrap_or_default();

    format!(
        r#"<div><h5 class="h3">{title}</h5><div class="viewMore-photoBackground"><img src="{image}" class="viewMore-mainPhoto" alt="{title_attr} photo"></div><div class="flexContainer-row mt-3 mb-3"><h5 class="h4">{username}</h5><h5 class="card-title h4 artcard-price">&dollar;{price}</h5></div><p>{description}</p><strong class="mb-5">Location: {location}</strong><br/><a href="{website_attr}" class="artcard-link">{website}</a><div class="artcard-columnwrap mt-5 viewMore-endBoarder"><p class="card-title h5-cyan">{category}</p><div class="bg-info text-white radius py-2 px-3 btn-font" id="{id}">Buy Now</div></div><button id="backToLanding" type="button" class="btn btn-dark mt-3 mb-5 btn-font radius">Back</button></div>"#,
        title = text(&item.title),
        image = attr(&item.image),
        title_attr = attr(&item.title),
        username = text(&author.username),
        price = item.price,
        description = text(&item.description),
        location = text(author.location.as_deref().unwrap_or_default()),
        website_attr = attr(website),
        website = text(website),
        category = text(&item.category),
        id = item.id,
    )
}

/// The comment thread of the detail page.
///
/// Comments posted under `current_user` are shown as "You" on the right.
pub fn comment_thread(items: &[comments::Model], current_user: Option<&str>) -> String {
    if items.is_empty() {
        return format!(r#"<div class="text-center">{NO_COMMENTS_MESSAGE}</div>"#);
    }

    items
        .iter()
        .map(|comment| {
            if current_user == Some(comment.post_by_username.as_str()) {
                let body = format!("<b>{}</b>", text(&comment.text));
                comment_html("comment-right", "You", &body, comment)
            } else {
                comment_html(
                    "comment-left",
                    &text(&comment.post_by_username),
                    &text(&comment.text),
                    comment,
                )
            }
        })
        .collect()
}

fn comment_html(side: &str, author: &str, body: &str, comment: &comments::Model) -> String {
    format!(
        r#"<div class="comment-container {side} mb-3"><div class="comment-info"><strong class="mr-1">{author}</strong><p>on {posted}</p></div><p>{body}</p></div>"#,
        posted = format_date(comment.posted),
    )
}
