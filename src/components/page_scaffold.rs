use leptos::ev;
use leptos::prelude::*;

use crate::components::{GraphAnimation, ProjectSnapshotCard, SidebarNavigation};
use crate::config::SIDEBAR_ITEMS;
use crate::hooks::use_active_section;

/// Keys that dismiss the mobile sheet. Older engines report `Esc`.
fn is_dismiss_key(key: &str) -> bool {
	matches!(key, "Escape" | "Esc")
}

/// Full-screen navigation sheet for narrow viewports.
///
/// Takes focus when opened and listens for Escape on the window, so the
/// key works before anything inside the sheet is focused.
#[component]
fn MobileSheet(
	open: RwSignal<bool>,
	active_item_id: &'static str,
	active_child_id: ReadSignal<Option<&'static str>>,
) -> impl IntoView {
	let close = move || open.set(false);
	let close_ref = NodeRef::<leptos::html::Button>::new();

	let keydown = window_event_listener(ev::keydown, move |ev| {
		if is_dismiss_key(&ev.key()) {
			close();
		}
	});
	on_cleanup(move || keydown.remove());

	Effect::new(move |_| {
		if let Some(button) = close_ref.get() {
			let _ = button.focus();
		}
	});

	view! {
		<div class="sheet-portal">
			<div class="sheet-overlay" on:click=move |_| close() />
			<div role="dialog" aria-modal="true" aria-labelledby="sheet-title" class="sheet-content">
				<h2 id="sheet-title" class="sr-only">
					"Site navigation"
				</h2>
				<div class="sheet-body">
					<div class="sheet-graph">
						<GraphAnimation />
					</div>
					<div class="sheet-nav">
						<SidebarNavigation
							items=SIDEBAR_ITEMS
							active_item_id=active_item_id
							active_child_id=active_child_id
							on_navigate=Callback::new(move |_| close())
						/>
					</div>
				</div>
				<button node_ref=close_ref type="button" class="sheet-close" on:click=move |_| close()>
					<span aria-hidden="true">"×"</span>
					<span class="sr-only">"Close"</span>
				</button>
			</div>
		</div>
	}
}

/// Shared page frame: graph and navigation on the left, content in the
/// middle, project snapshot on the right. Collapses to a menu button and a
/// trailing snapshot card on narrow screens.
#[component]
pub fn PageScaffold(
	active_item_id: &'static str,
	/// Ids of in-page sections whose visibility drives the child links.
	#[prop(optional)]
	section_ids: &'static [&'static str],
	children: Children,
) -> impl IntoView {
	let mobile_open = RwSignal::new(false);
	let active_child_id = use_active_section(section_ids);

	view! {
		<div class="page-scaffold">
			<div class="mobile-bar">
				<button
					type="button"
					class="menu-button"
					aria-label="Open navigation"
					aria-expanded=move || mobile_open.get().to_string()
					on:click=move |_| mobile_open.update(|open| *open = !*open)
				>
					<span class="menu-icon" aria-hidden="true" />
				</button>
			</div>
			<Show when=move || mobile_open.get()>
				<MobileSheet open=mobile_open active_item_id=active_item_id active_child_id=active_child_id />
			</Show>

			<div class="page-grid">
				<aside class="page-sidebar">
					<div class="page-sidebar-inner">
						<GraphAnimation />
						<SidebarNavigation
							items=SIDEBAR_ITEMS
							active_item_id=active_item_id
							active_child_id=active_child_id
						/>
					</div>
				</aside>

				<main class="page-main">{children()}</main>

				<aside class="page-aside">
					<div class="page-aside-inner">
						<ProjectSnapshotCard />
					</div>
				</aside>
			</div>

			<div class="mobile-snapshot">
				<ProjectSnapshotCard />
			</div>
		</div>
	}
}
