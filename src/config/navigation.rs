//! Sidebar sections shared by every page.

/// A nested link shown under an active top-level section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChild {
	pub id: &'static str,
	pub title: &'static str,
	pub href: &'static str,
}

/// A top-level sidebar section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub id: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub href: &'static str,
	pub children: &'static [NavChild],
}

/// Ordered sections of the site.
pub const SIDEBAR_ITEMS: &[NavItem] = &[
	NavItem {
		id: "overview",
		title: "Overview",
		description: "Aim, motivation, and research vision.",
		href: "/",
		children: &[],
	},
	NavItem {
		id: "latest-updates",
		title: "Latest updates",
		description: "Milestones, breakthroughs, and setbacks.",
		href: "/latest-updates",
		children: &[],
	},
	NavItem {
		id: "reading-materials",
		title: "Reading materials",
		description: "Papers, notes, and working artifacts.",
		href: "/reading-materials",
		children: &[],
	},
	NavItem {
		id: "about-me",
		title: "About me",
		description: "Background, collaborators, and tools.",
		href: "/about-me",
		children: &[
			NavChild {
				id: "about-profile",
				title: "Profile & collaborators",
				href: "/about-me#about-profile",
			},
			NavChild {
				id: "about-collaborators",
				title: "Collaborators",
				href: "/about-me#about-collaborators",
			},
		],
	},
	NavItem {
		id: "how-you-can-help",
		title: "How you can help",
		description: "Support requests and collaboration pathways.",
		href: "/how-you-can-help",
		children: &[],
	},
];

/// Splits an href into its path and non-empty fragment.
pub fn split_href(href: &str) -> (&str, Option<&str>) {
	match href.split_once('#') {
		Some((path, fragment)) => (path, Some(fragment).filter(|f| !f.is_empty())),
		None => (href, None),
	}
}

/// Returns the fragment to scroll to when `href` targets a section on the
/// page at `current_path`. An empty path in `href` means the current page.
pub fn same_page_anchor<'a>(current_path: &str, href: &'a str) -> Option<&'a str> {
	let (path, fragment) = split_href(href);
	let fragment = fragment?;
	let normalize = |p: &str| p.trim_end_matches('/').to_owned();
	if path.is_empty() || normalize(path) == normalize(current_path) {
		Some(fragment)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn section_ids_are_unique() {
		let mut ids: Vec<&str> = SIDEBAR_ITEMS
			.iter()
			.flat_map(|item| std::iter::once(item.id).chain(item.children.iter().map(|c| c.id)))
			.collect();
		let total = ids.len();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), total);
	}

	#[test]
	fn children_point_into_their_parent_page() {
		for item in SIDEBAR_ITEMS {
			for child in item.children {
				assert_eq!(split_href(child.href).0, item.href);
				assert_eq!(split_href(child.href).1, Some(child.id));
			}
		}
	}

	#[test]
	fn anchor_on_same_page_is_scrolled() {
		assert_eq!(
			same_page_anchor("/about-me", "/about-me#about-profile"),
			Some("about-profile")
		);
		assert_eq!(
			same_page_anchor("/about-me/", "/about-me#about-profile"),
			Some("about-profile")
		);
		assert_eq!(same_page_anchor("/about-me", "#about-collaborators"), Some("about-collaborators"));
	}

	#[test]
	fn cross_page_or_plain_links_are_left_to_the_router() {
		assert_eq!(same_page_anchor("/", "/about-me#about-profile"), None);
		assert_eq!(same_page_anchor("/about-me", "/about-me"), None);
		assert_eq!(same_page_anchor("/about-me", "/about-me#"), None);
	}
}
