//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod content;
mod hooks;
mod pages;

use crate::components::graph_animation::TemplateStore;

// Top-Level pages
use crate::pages::about_me::AboutMe;
use crate::pages::home::Home;
use crate::pages::how_you_can_help::HowYouCanHelp;
use crate::pages::latest_updates::LatestUpdates;
use crate::pages::not_found::NotFound;
use crate::pages::reading_materials::ReadingMaterials;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Site router. Every page shares one [`TemplateStore`], so graph animations
/// resume from the last layout shown when navigating between pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(TemplateStore::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Brian Kelleher | Proving the Unproven" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Public documentation of Brian Kelleher's four-week exploration into AI-assisted mathematics during Edge City Patagonia."
		/>

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/latest-updates") view=LatestUpdates />
				<Route path=path!("/reading-materials") view=ReadingMaterials />
				<Route path=path!("/about-me") view=AboutMe />
				<Route path=path!("/how-you-can-help") view=HowYouCanHelp />
			</Routes>
		</Router>
	}
}
