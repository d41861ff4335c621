// src/gui/actions/open_store.rs
use crate::{
    file::{find_nearest_existing_parent, open_folder_in_explorer},
    gui::app::App,
    store,
};

/// Open the artifact folder in the system file explorer.
pub fn open_store(app: &App) {
    let folder = find_nearest_existing_parent(&store::store_dir());

    // Absolute path, so the explorer lands on the right folder regardless
    // of the working directory it inherits.
    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve store path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute.display());
    }
}
