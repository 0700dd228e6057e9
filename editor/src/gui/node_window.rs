use graph::interaction::Interaction;

/// Node properties window. While it is open the canvas ignores the pointer,
/// so closing it must go through [`Interaction::reset`].
#[derive(Debug, Default)]
pub struct NodeWindow {
    name: String,
}

impl NodeWindow {
    /// Opens with a blank name field; the window never carries stale text.
    pub fn open(&mut self, interaction: &mut Interaction) {
        self.name.clear();
        interaction.open_window();
    }

    pub fn show(&mut self, ctx: &egui::Context, interaction: &mut Interaction) {
        if !interaction.window_open() {
            return;
        }

        let mut keep_open = true;
        let mut done = false;

        egui::Window::new("Node properties")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .fixed_pos([100.0, 100.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name");
                    ui.add(egui::TextEdit::singleline(&mut self.name).desired_width(96.0));
                });
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        done = true;
                    }
                    if ui.button("Ok").clicked() {
                        log::debug!("set name to {:?}", self.name);
                        done = true;
                    }
                });
            });

        if done || !keep_open {
            interaction.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_blanks_the_name_and_grabs_the_pointer() {
        let mut window = NodeWindow::default();
        window.name = "relay".to_string();

        let mut interaction = Interaction::default();
        window.open(&mut interaction);

        assert!(window.name.is_empty());
        assert!(interaction.window_open());
    }
}
