//! Browser state and key handling

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use super::utils::{cycle_filter, wrap_index};
use super::views;
use crate::domain::{Category, Difficulty, SearchCriteria, ToyEntry};
use crate::router::{use_navigate, ListenerId, MemoryHistory, NavigateOptions, Router, RouterHandle};
use crate::site::{NavItem, Page, Resolution, Site};
use crate::storage::SiteConfig;

/// Which part of the screen takes movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Header,
    #[default]
    Content,
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the Toy Space search text
    Search,
}

/// Browser state
pub struct App<'a> {
    site: &'a Site,
    handle: RouterHandle,

    /// Page for the router's current path; refreshed after every change
    resolution: Resolution,

    /// Set by the router listener whenever the location changes
    stale: Rc<Cell<bool>>,
    listener: ListenerId,

    criteria: SearchCriteria,
    related_limit: usize,

    focus: Focus,
    input_mode: InputMode,
    nav_index: usize,
    toy_index: usize,

    status_message: Option<String>,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(site: &'a Site, config: &SiteConfig, path: &str) -> Self {
        let mut router = Router::with_history(MemoryHistory::new(path));

        let stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale);
        let listener = router.subscribe(move |_| flag.set(true));

        let resolution = site.open(&mut router);
        stale.set(false);

        let mut app = Self {
            site,
            handle: RouterHandle::new(router),
            status_message: redirect_message(&resolution),
            resolution,
            stale,
            listener,
            criteria: SearchCriteria::new(),
            related_limit: config.toy_space.related_limit,
            focus: Focus::default(),
            input_mode: InputMode::default(),
            nav_index: 0,
            toy_index: 0,
            should_quit: false,
        };
        app.select_active_nav();
        app
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        let listener = self.listener;
        self.handle.with_router(|router| router.unsubscribe(listener));
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        views::draw(frame, self);
    }

    // Accessors for views

    pub fn handle(&self) -> &RouterHandle {
        &self.handle
    }

    pub fn site(&self) -> &Site {
        self.site
    }

    pub fn page(&self) -> &Page {
        &self.resolution.page
    }

    pub fn location(&self) -> String {
        self.handle.location()
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.site.nav_items()
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    pub fn toy_index(&self) -> usize {
        self.toy_index
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Entry shown on a detail page
    pub fn current_toy(&self) -> Option<&ToyEntry> {
        match &self.resolution.page {
            Page::ToyDetail { slug } => self.site.catalog().find_by_slug(slug),
            _ => None,
        }
    }

    /// Entries the content panel lists: query results or related entries
    pub fn visible_toys(&self) -> Vec<&ToyEntry> {
        match &self.resolution.page {
            Page::ToySpace => self.site.catalog().query(&self.criteria),
            Page::ToyDetail { .. } => match self.current_toy() {
                Some(toy) => self.site.catalog().related(toy, self.related_limit),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // Key handling

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Navigation from key handlers goes through the provided router
        let handle = self.handle.clone();
        handle.provide(|| match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
        });

        self.refresh();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Header => Focus::Content,
                    Focus::Content => Focus::Header,
                };
            }

            KeyCode::Char('b') | KeyCode::Backspace => {
                if !self.handle.with_router(|router| router.back()) {
                    self.status_message = Some("Nothing to go back to".to_string());
                }
            }
            KeyCode::Char('f') => {
                if !self.handle.with_router(|router| router.forward()) {
                    self.status_message = Some("Nothing to go forward to".to_string());
                }
            }

            KeyCode::Char('?') => {
                self.status_message = Some(
                    "tab:focus h/l:links j/k:move enter:open b:back f:forward /:search \
                     c:category d:difficulty s:sort x:reset 1-9:tag/link q:quit"
                        .to_string(),
                );
            }

            _ => match self.focus {
                Focus::Header => self.handle_header_key(key),
                Focus::Content => self.handle_content_key(key),
            },
        }
    }

    fn handle_header_key(&mut self, key: KeyEvent) {
        let len = self.nav_items().len();
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => {
                self.nav_index = wrap_index(self.nav_index, len, true);
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.nav_index = wrap_index(self.nav_index, len, false);
            }
            KeyCode::Enter => match self.nav_items().get(self.nav_index) {
                Some(item) if item.external => {
                    self.status_message = Some(format!("{}: {}", item.label, item.to));
                }
                Some(item) => use_navigate().navigate(item.to, NavigateOptions::push()),
                None => {}
            },
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        let toys = self.visible_toys().len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.toy_index = wrap_index(self.toy_index, toys, true);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.toy_index = wrap_index(self.toy_index, toys, false);
            }
            KeyCode::Enter => {
                let target = self.visible_toys().get(self.toy_index).map(|toy| toy.path());
                if let Some(path) = target {
                    use_navigate().navigate(&path, NavigateOptions::push());
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let n = c as usize - '1' as usize;
                self.follow_number(n);
            }
            _ if matches!(self.resolution.page, Page::ToySpace) => self.handle_filter_key(key),
            _ => {}
        }
    }

    /// Digits toggle tags on the listing and follow page links elsewhere
    fn follow_number(&mut self, n: usize) {
        if matches!(self.resolution.page, Page::ToySpace) {
            let tag = self.site.catalog().tags().get(n).map(|tag| tag.id.clone());
            if let Some(tag) = tag {
                self.criteria.toggle_tag(&tag);
                self.toy_index = 0;
            }
        } else if let Some(copy) = self.resolution.page.copy() {
            if let Some((_, to)) = copy.links.get(n) {
                use_navigate().navigate(to, NavigateOptions::push());
            }
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('c') => {
                let next = cycle_filter(self.criteria.category, Category::all());
                self.criteria.set_category(next);
            }
            KeyCode::Char('d') => {
                let next = cycle_filter(self.criteria.difficulty, Difficulty::all());
                self.criteria.set_difficulty(next);
            }
            KeyCode::Char('s') => {
                let next = self.criteria.sort_order.toggled();
                self.criteria.set_sort_order(next);
            }
            KeyCode::Char('x') => {
                self.criteria.reset();
                self.status_message = Some("Filters reset".to_string());
            }
            _ => return,
        }
        self.toy_index = 0;
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let mut query = self.criteria.query.clone();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(c) => query.push(c),
            _ => return,
        }
        self.criteria.set_query(query);
        self.toy_index = 0;
    }

    /// Re-resolves the page if the router moved since the last refresh
    fn refresh(&mut self) {
        if !self.stale.replace(false) {
            return;
        }

        let site = self.site;
        self.resolution = self.handle.with_router(|router| site.open(router));
        // Redirects navigate too; those are part of this refresh
        self.stale.set(false);

        if let Some(message) = redirect_message(&self.resolution) {
            self.status_message = Some(message);
        }
        // Criteria belong to one listing view; leaving it discards them
        if !matches!(self.resolution.page, Page::ToySpace) {
            self.criteria.reset();
        }
        self.toy_index = 0;
        self.input_mode = InputMode::Normal;
        self.select_active_nav();
    }

    fn select_active_nav(&mut self) {
        let location = self.handle.location();
        if let Some(i) = self.nav_items().iter().position(|item| item.is_active(&location)) {
            self.nav_index = i;
        }
    }
}

fn redirect_message(resolution: &Resolution) -> Option<String> {
    resolution
        .redirects
        .first()
        .map(|from| format!("{} redirected to {}", from, resolution.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Role;
    use crate::storage::builtin_catalog;

    fn site(role: Role) -> Site {
        Site::new(builtin_catalog().unwrap(), role).unwrap()
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_on_resolved_page() {
        let site = site(Role::Visitor);
        let app = App::new(&site, &SiteConfig::default(), "/toy-space/nope");
        assert_eq!(*app.page(), Page::ToySpace);
        assert_eq!(app.location(), "/toy-space");
        assert!(app.status_message().unwrap().contains("redirected"));
    }

    #[test]
    fn header_navigation_and_back() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Header);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(*app.page(), Page::HueAreYou);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(*app.page(), Page::Home);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.location(), "/hue-are-you");
    }

    #[test]
    fn external_header_link_stays_put() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/contact");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.location(), "/contact");
        assert!(app.status_message().unwrap().contains("github.com"));
    }

    #[test]
    fn open_toy_from_listing() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/toy-space");
        assert_eq!(app.visible_toys().len(), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            *app.page(),
            Page::ToyDetail {
                slug: "hue-visualizer".to_string()
            }
        );
        assert!(!app.visible_toys().is_empty());
    }

    #[test]
    fn filter_keys_update_criteria() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/toy-space");

        // First tag is react
        press(&mut app, KeyCode::Char('1'));
        assert!(app.criteria().is_tag_selected("react"));
        assert_eq!(app.visible_toys().len(), 2);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode(), InputMode::Search);
        for c in "llm".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.criteria().query, "llm");
        assert_eq!(app.visible_toys().len(), 1);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.criteria().is_default());
    }

    #[test]
    fn criteria_do_not_outlive_the_listing() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/toy-space");

        press(&mut app, KeyCode::Char('1'));
        assert!(!app.criteria().is_default());

        // Home is the first header link
        press(&mut app, KeyCode::Tab);
        app.nav_index = 0;
        press(&mut app, KeyCode::Enter);
        assert_eq!(*app.page(), Page::Home);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(*app.page(), Page::ToySpace);
        assert!(app.criteria().is_default());
        assert_eq!(app.visible_toys().len(), 3);
    }

    #[test]
    fn criteria_survive_staying_on_the_listing() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/toy-space");

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.criteria().is_tag_selected("react"));
        assert_eq!(app.criteria().sort_order, crate::domain::SortOrder::Popular);
    }

    #[test]
    fn page_links_follow_digits() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/");
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(*app.page(), Page::Portfolio);
    }

    #[test]
    fn quit_key() {
        let site = site(Role::Visitor);
        let mut app = App::new(&site, &SiteConfig::default(), "/");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
