use std::cell::RefCell;
use std::rc::Rc;

use gtk::glib;
use gtk::prelude::*;
use glib::clone;
use webkit6::prelude::*;

use crate::history::Navigator;
use crate::location;

pub struct Window {
    app_window: gtk::ApplicationWindow,
    back_button: gtk::Button,
    forward_button: gtk::Button,
    help_button: gtk::Button,
    address_entry: gtk::Entry,
    webview: webkit6::WebView,
    content: gtk::Stack,
    status_label: gtk::Label,
    pub state: RefCell<State>,
}

pub struct State {
    pub nav: Navigator,
}

impl Window {
    pub fn new(app: &gtk::Application, globals: &'static crate::Globals) {
        // Icon names are documented here: https://specifications.freedesktop.org/icon-naming-spec/icon-naming-spec-latest.html
        let back_button = gtk::Button::from_icon_name("go-previous");
        let forward_button = gtk::Button::from_icon_name("go-next");
        let help_button = gtk::Button::from_icon_name("help-browser");

        let address_entry = gtk::Entry::new();
        address_entry.set_property("placeholder-text", "Enter address");
        address_entry.set_hexpand(true);

        let top_bar = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        top_bar.add_css_class("control-strip");
        top_bar.append(&back_button);
        top_bar.append(&forward_button);
        top_bar.append(&address_entry);
        top_bar.append(&help_button);

        let webview = webkit6::WebView::new();
        webview.set_hexpand(true);
        webview.set_vexpand(true);

        // The content area is either the engine's view or the static help
        // screen, mirroring what the current history entry is.
        let content = gtk::Stack::new();
        content.set_hexpand(true);
        content.set_vexpand(true);
        content.add_named(&webview, Some("web"));
        content.add_named(&crate::help::build(), Some("help"));

        let status_label = gtk::Label::new(None);
        status_label.set_xalign(0.0);
        status_label.set_hexpand(true);
        status_label.set_ellipsize(gtk::pango::EllipsizeMode::End);

        let status_bar = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        status_bar.add_css_class("status-bar");
        status_bar.append(&status_label);

        let vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
        vbox.append(&top_bar);
        vbox.append(&content);
        vbox.append(&status_bar);

        let app_window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("Minnow")
            .child(&vbox)
            .width_request(1280)
            .height_request(720)
            .show_menubar(true)
            .build();

        app_window.present();

        let state = State {
            nav: Navigator::new(),
        };
        let window = Rc::new(Self {
            app_window,
            back_button,
            forward_button,
            help_button,
            address_entry,
            webview,
            content,
            status_label,
            state: RefCell::new(state),
        });

        window.back_button.connect_clicked(clone!(@weak window => move |_| {
            window.go_back();
        }));

        window.forward_button.connect_clicked(clone!(@weak window => move |_| {
            window.go_forward();
        }));

        window.help_button.connect_clicked(clone!(@weak window => move |_| {
            window.show_help();
        }));

        window.address_entry.connect_activate(clone!(@weak window => move |_| {
            let input = window.address_entry.text().to_string();
            if location::is_help(&input) {
                window.show_help();
            } else {
                window.load(location::normalize(&input));
            }
        }));

        // The engine's completion notification: carries the resolved
        // location and title through the view's accessors.
        window.webview.connect_load_changed(clone!(@weak window => move |_, event| {
            if event == webkit6::LoadEvent::Finished {
                window.page_loaded();
            }
        }));

        // Link hover drives the status bar; WebKit reports both entering and
        // leaving a link through the same hit-test signal.
        window.webview.connect_mouse_target_changed(clone!(@weak window => move |_, hit, _| {
            if hit.context_is_link() {
                if let Some(target) = hit.link_uri() {
                    window.status_label.set_text(&target);
                }
            } else {
                window.status_label.set_text("");
            }
        }));

        // A failed load stays on whatever was displayed before; returning
        // true keeps WebKit's built-in error page out of the view.
        window.webview.connect_load_failed(|_, _, uri, err| {
            log::warn!("failed to load {}: {}", uri, err);
            true
        });

        match &globals.initial_location {
            Some(input) if location::is_help(input) => window.clone().show_help(),
            Some(input) => window.clone().load(location::normalize(input)),
            None => window.clone().show_help(),
        }

        // The signal handlers only hold weak references; the window itself
        // lives until the process exits.
        std::mem::forget(window);
    }

    fn load(self: Rc<Self>, location: String) {
        log::info!("navigating to {}", location);
        self.webview.load_uri(&location);
    }

    /// Reacts to the engine finishing a load: swaps the engine view back in
    /// if the help screen was showing, mirrors the resolved location into
    /// the title bar and address bar, and records the visit unless this
    /// completion was a back/forward replay.
    fn page_loaded(self: Rc<Self>) {
        let location = match self.webview.uri() {
            Some(uri) => uri.to_string(),
            None => return,
        };

        self.content.set_visible_child_name("web");

        let title = self
            .webview
            .title()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .unwrap_or_else(|| location.clone());
        self.app_window.set_title(Some(&title));
        self.address_entry.set_text(&location);

        let recorded = self.state.borrow_mut().nav.page_loaded(&location);
        log::debug!("load finished: {} (recorded: {})", location, recorded);
        self.update_nav_buttons();
    }

    fn go_back(self: Rc<Self>) {
        let target = self.state.borrow_mut().nav.back();
        match target {
            Some(target) if location::is_help(&target) => self.show_help(),
            Some(target) => self.load(target),
            None => log::debug!("no history behind the cursor"),
        }
    }

    fn go_forward(self: Rc<Self>) {
        let target = self.state.borrow_mut().nav.forward();
        match target {
            Some(target) if location::is_help(&target) => self.show_help(),
            Some(target) => self.load(target),
            None => log::debug!("no history ahead of the cursor"),
        }
    }

    /// Displays the static help screen without involving the engine. It
    /// enters history through the same gate as a finished page load, so
    /// back/forward replay across it behaves like any other entry.
    fn show_help(self: Rc<Self>) {
        self.content.set_visible_child_name("help");
        self.app_window.set_title(Some("Help"));
        self.address_entry.set_text(location::HELP_URI);
        self.status_label.set_text("");

        let recorded = self.state.borrow_mut().nav.page_loaded(location::HELP_URI);
        log::debug!("help screen shown (recorded: {})", recorded);
        self.update_nav_buttons();
    }

    fn update_nav_buttons(&self) {
        let state = self.state.borrow();
        let history = state.nav.history();
        self.back_button.set_sensitive(history.can_go_back());
        self.forward_button.set_sensitive(history.can_go_forward());
        log::debug!(
            "history: {} entries, cursor {:?}",
            history.len(),
            history.cursor()
        );
    }
}
