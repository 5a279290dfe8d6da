use gtk::gio;
use gtk::glib;
use gtk::prelude::*;

pub fn about(_action: &gio::SimpleAction, _param: Option<&glib::Variant>) {
    gtk::AboutDialog::builder()
        .program_name("Minnow")
        .comments("A minimal web browser shell: back/forward history, an address bar, and a built-in help screen.")
        .build()
        .set_visible(true);
}
