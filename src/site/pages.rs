//! Static page copy

/// Text of a static page plus its in-page links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// `(label, path)` buttons that navigate within the site
    pub links: &'static [(&'static str, &'static str)],
}

pub const HOME: PageCopy = PageCopy {
    title: "Welcome",
    lines: &["This site is under construction."],
    links: &[
        ("Try Hue Are You?", "/hue-are-you"),
        ("See the portfolio", "/portfolio"),
    ],
};

pub const PORTFOLIO: PageCopy = PageCopy {
    title: "Portfolio",
    lines: &[
        "About: Hibiki Morimoto",
        "Career, skill set, tools and frameworks",
        "Works will be added here.",
    ],
    links: &[("Browse Toy Space", "/toy-space")],
};

pub const CONTACT: PageCopy = PageCopy {
    title: "Contact",
    lines: &[
        "Questions and requests are welcome by email.",
        "contact@ahahacraft.dev",
    ],
    links: &[],
};

pub const HUE_ARE_YOU: PageCopy = PageCopy {
    title: "Hue Are You?",
    lines: &[
        "Assign a color to each word and see the hue your answers add up to.",
        "The quiz runs in the web version of the site.",
    ],
    links: &[("Back to home", "/")],
};

pub const ADMIN: PageCopy = PageCopy {
    title: "Admin",
    lines: &[
        "User management: coming soon.",
        "Hue Are You results: use `ahaha admin range <start> <end>` to build a fetch request.",
    ],
    links: &[],
};
