use clap::Parser;
use gtk::gdk;
use gtk::gio;
use gtk::prelude::*;

mod actions;
mod help;
mod history;
mod location;
mod window;

#[derive(Parser, Debug)]
struct Args {
    /// Address to open at startup, or browser://help. Defaults to the help
    /// screen when absent.
    location: Option<String>,
}

pub struct Globals {
    initial_location: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // glib callbacks need referenced values to be 'static.
    let globals: &'static Globals = Box::leak(Box::new(Globals {
        initial_location: args.location,
    }));

    let app = gtk::Application::builder()
        .application_id("org.minnow.Browser")
        .build();

    define_actions(&app);

    app.connect_startup(|app| {
        let provider = gtk::CssProvider::new();
        provider.load_from_data(include_str!("style.css"));

        gtk::style_context_add_provider_for_display(
            &gdk::Display::default().expect("could not connect to a display"),
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        app.set_menubar(Some(&build_menu()));
    });

    app.connect_activate(move |app| {
        window::Window::new(app, globals);
    });

    // Arguments are handled by clap; GTK never sees them.
    app.run_with_args::<String>(&[]);
}

fn define_actions(app: &gtk::Application) {
    let quit = gio::SimpleAction::new("quit", None);
    {
        let app = app.clone();
        quit.connect_activate(move |_, _| app.quit());
    }
    app.add_action(&quit);

    let about = gio::SimpleAction::new("about", None);
    about.connect_activate(actions::about);
    app.add_action(&about);
}

fn build_menu() -> gio::Menu {
    let file = gio::Menu::new();
    let quit = gio::MenuItem::new(Some("Quit"), Some("app.quit"));
    file.append_item(&quit);

    let help = gio::Menu::new();
    let about = gio::MenuItem::new(Some("About"), Some("app.about"));
    help.append_item(&about);

    let menu = gio::Menu::new();
    menu.append_submenu(Some("File"), &file);
    menu.append_submenu(Some("Help"), &help);
    menu
}
