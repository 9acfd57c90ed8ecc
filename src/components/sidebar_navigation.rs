use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::NavItem;
use crate::config::navigation::{same_page_anchor, split_href};

/// Smooth-scrolls to `fragment` and records it in the address bar without
/// adding a history entry. Returns false when the target is missing.
fn scroll_to_section(path: &str, fragment: &str) -> bool {
	let id = js_sys::decode_uri_component(fragment)
		.map(String::from)
		.unwrap_or_else(|_| fragment.to_owned());
	let Some(window) = web_sys::window() else {
		return false;
	};
	let Some(target) = window.document().and_then(|d| d.get_element_by_id(&id)) else {
		return false;
	};

	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	target.scroll_into_view_with_scroll_into_view_options(&options);

	if let Ok(history) = window.history() {
		let url = format!("{path}#{fragment}");
		if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
			warn!("could not update history for {}: {:?}", url, err);
		}
	}
	true
}

/// Primary site navigation. Children of the active item are listed beneath it.
#[component]
pub fn SidebarNavigation(
	items: &'static [NavItem],
	active_item_id: &'static str,
	#[prop(into)] active_child_id: Signal<Option<&'static str>>,
	/// Fired before any link is followed, e.g. to close the mobile sheet.
	#[prop(optional)]
	on_navigate: Option<Callback<()>>,
) -> impl IntoView {
	let pathname = use_location().pathname;

	let follow = move |ev: MouseEvent, href: &'static str| {
		if let Some(callback) = on_navigate {
			callback.run(());
		}
		let current = pathname.get_untracked();
		let Some(fragment) = same_page_anchor(&current, href) else {
			return;
		};
		let path = match split_href(href).0 {
			"" => current.as_str(),
			path => path,
		};
		if scroll_to_section(path, fragment) {
			ev.prevent_default();
			debug!("scrolled to #{}", fragment);
		}
	};

	let entries = items
		.iter()
		.map(|item| {
			let is_active = item.id == active_item_id;
			let children = (is_active && !item.children.is_empty()).then(|| {
				let links = item
					.children
					.iter()
					.map(|child| {
						let href = child.href;
						let child_id = child.id;
						view! {
							<a
								href=href
								class="nav-child"
								class:active=move || active_child_id.get() == Some(child_id)
								on:click=move |ev| follow(ev, href)
							>
								{child.title}
							</a>
						}
					})
					.collect_view();
				view! {
					<div role="list" class="nav-children">
						{links}
					</div>
				}
			});
			let href = item.href;
			view! {
				<div class="nav-entry">
					<a
						href=href
						class="nav-link"
						class:active=is_active
						aria-current={is_active.then_some("page")}
						on:click=move |ev| follow(ev, href)
					>
						<span class="nav-title">{item.title}</span>
					</a>
					{children}
				</div>
			}
		})
		.collect_view();

	view! {
		<nav aria-label="Primary" class="sidebar-navigation">
			{entries}
		</nav>
	}
}
