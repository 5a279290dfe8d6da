use gtk::prelude::*;

const HELP_TEXT: &str = "\
This is a minimal web browser. For questions, refer to the following \
documentation.

Q: How can I get help?
A: Press the '?' button, or type browser://help into the address bar.

Q: Why won't the address I entered load?
A: The address was probably malformed. Follow the format \
http://www.addressname and try again.

Q: How can I move backwards or forwards through my history?
A: Press the '<' back button or the '>' forward button.";

/// Builds the static help screen. It never touches the rendering engine; the
/// window swaps it in as one more content page.
pub fn build() -> gtk::Box {
    let title = gtk::Label::new(Some("Web Browser Help"));
    title.add_css_class("help-title");

    let body = gtk::TextView::with_buffer(&gtk::TextBuffer::builder().text(HELP_TEXT).build());
    body.set_editable(false);
    body.set_cursor_visible(false);
    body.set_wrap_mode(gtk::WrapMode::Word);
    body.set_left_margin(12);
    body.set_right_margin(12);
    body.set_top_margin(12);

    let scroll = gtk::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&body)
        .build();

    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 10);
    vbox.append(&title);
    vbox.append(&scroll);
    vbox
}
