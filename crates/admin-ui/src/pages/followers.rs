//! Followers management page component
//!
//! Shows two tables over the follower state fetched on mount: pending follow
//! requests (rendered only when any exist) and approved followers. Both
//! tables sort by their date column, newest first by default, with the
//! direction toggled by clicking the column header, and page at a fixed
//! size of 20 rows.
//!
//! Approving a pending request issues a write keyed by the row's link and
//! re-fetches both lists; the row moves between tables only once the
//! re-fetch lands. There is no loading indicator and no user-facing error
//! state: a failed fetch leaves the screen as it was.

use dioxus::prelude::*;

use crate::components::forms::Button;
use crate::hooks::use_followers::use_followers;
use crate::models::follower::{
    page, page_count, sort_followers, Follower, FollowerSortField, SortOrder,
};
use crate::utils::format::format_date;

/// Followers management page
#[component]
pub fn FollowersPage() -> Element {
    let followers_ctx = use_followers();
    let lists = followers_ctx.lists;

    let mut pending_order = use_signal(SortOrder::default);
    let mut followers_order = use_signal(SortOrder::default);
    let mut pending_page = use_signal(|| 0usize);
    let mut followers_page = use_signal(|| 0usize);

    let pending = {
        let mut rows = lists().pending;
        sort_followers(&mut rows, FollowerSortField::Requested, pending_order());
        rows
    };
    let followers = {
        let mut rows = lists().followers;
        sort_followers(&mut rows, FollowerSortField::Approved, followers_order());
        rows
    };

    rsx! {
        div { class: "followers-section space-y-6",
            if !pending.is_empty() {
                section { class: "bg-white shadow rounded-lg px-4 py-5 sm:p-6",
                    h3 { class: "text-lg leading-6 font-medium text-gray-900",
                        "Followers needing approval"
                    }
                    p { class: "mt-1 mb-4 text-sm text-gray-500",
                        "These accounts asked to follow this server on the Fediverse and be alerted when you go live."
                    }
                    FollowerTable {
                        rows: pending,
                        date_field: FollowerSortField::Requested,
                        order: pending_order(),
                        page_index: pending_page(),
                        show_approve: true,
                        onapprove: {
                            let followers_ctx = followers_ctx.clone();
                            move |link: String| followers_ctx.approve(link)
                        },
                        ontoggleorder: move |_| pending_order.set(pending_order().toggled()),
                        onpage: move |index| pending_page.set(index),
                    }
                }
            }

            section { class: "bg-white shadow rounded-lg px-4 py-5 sm:p-6",
                h3 { class: "text-lg leading-6 font-medium text-gray-900", "Followers" }
                p { class: "mt-1 mb-4 text-sm text-gray-500",
                    "These accounts get notified on the Fediverse when you go live."
                }
                FollowerTable {
                    rows: followers,
                    date_field: FollowerSortField::Approved,
                    order: followers_order(),
                    page_index: followers_page(),
                    ontoggleorder: move |_| followers_order.set(followers_order().toggled()),
                    onpage: move |index| followers_page.set(index),
                }
            }
        }
    }
}

/// One follower table: avatar, name, account link and a sortable date column
#[component]
fn FollowerTable(
    rows: Vec<Follower>,
    date_field: FollowerSortField,
    order: SortOrder,
    page_index: usize,
    #[props(default = false)] show_approve: bool,
    #[props(default = EventHandler::default())] onapprove: EventHandler<String>,
    ontoggleorder: EventHandler<()>,
    onpage: EventHandler<usize>,
) -> Element {
    let total_pages = page_count(rows.len());
    let visible: Vec<Follower> = page(&rows, page_index).to_vec();
    let display_page = page_index + 1;
    let order_glyph = match order {
        SortOrder::Descending => "↓",
        SortOrder::Ascending => "↑",
    };

    rsx! {
        table { class: "min-w-full divide-y divide-gray-200",
            thead {
                tr {
                    if show_approve {
                        th { class: "table-heading", "Approve" }
                    }
                    th { class: "table-heading", "" }
                    th { class: "table-heading", "Name" }
                    th { class: "table-heading", "Account" }
                    th { class: "table-heading",
                        button {
                            class: "table-sort-button",
                            onclick: move |_| ontoggleorder.call(()),
                            "{date_field.header()} {order_glyph}"
                        }
                    }
                }
            }
            tbody { class: "divide-y divide-gray-100",
                for follower in visible.iter() {
                    FollowerRow {
                        key: "{follower.link}",
                        follower: follower.clone(),
                        date_field: date_field,
                        show_approve: show_approve,
                        onapprove: onapprove,
                    }
                }
            }
        }
        if total_pages > 1 {
            div { class: "flex items-center justify-between mt-2",
                Button {
                    variant: "secondary".to_string(),
                    size: "small".to_string(),
                    disabled: page_index == 0,
                    onclick: move |_| onpage.call(page_index.saturating_sub(1)),
                    "Previous"
                }
                span { class: "text-sm text-gray-500", "Page {display_page} of {total_pages}" }
                Button {
                    variant: "secondary".to_string(),
                    size: "small".to_string(),
                    disabled: page_index + 1 >= total_pages,
                    onclick: move |_| onpage.call(page_index + 1),
                    "Next"
                }
            }
        }
    }
}

/// One table row, keyed by the follower's link
#[component]
fn FollowerRow(
    follower: Follower,
    date_field: FollowerSortField,
    #[props(default = false)] show_approve: bool,
    #[props(default = EventHandler::default())] onapprove: EventHandler<String>,
) -> Element {
    let date_cell = match date_field {
        FollowerSortField::Requested => format_date(&follower.created_at),
        FollowerSortField::Approved => follower
            .approved
            .as_ref()
            .map(format_date)
            .unwrap_or_default(),
    };
    let link = follower.link.clone();

    rsx! {
        tr {
            if show_approve {
                td { class: "table-cell",
                    Button {
                        variant: "primary".to_string(),
                        size: "small".to_string(),
                        onclick: move |_| onapprove.call(link.clone()),
                        "Approve"
                    }
                }
            }
            td { class: "table-cell w-16",
                img {
                    class: "h-10 w-10 rounded-full",
                    src: "{follower.image}",
                    alt: "",
                }
            }
            td { class: "table-cell", "{follower.name}" }
            td { class: "table-cell",
                a {
                    href: "{follower.link}",
                    target: "_blank",
                    rel: "noreferrer",
                    "{follower.link}"
                }
            }
            td { class: "table-cell", "{date_cell}" }
        }
    }
}
