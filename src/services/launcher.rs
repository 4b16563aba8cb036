//! Browser launch.

/// Hands a URL to something that can display it.
pub trait Launcher {
    fn open(&self, url: &str);
}

/// Opens URLs in the host's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&self, url: &str) {
        match open::that(url) {
            Ok(()) => log::info!("Opened {} in the browser", url),
            Err(e) => log::warn!("Failed to open {}: {}", url, e),
        }
    }
}

/// Open `url` only when the user confirmed.
pub fn launch(launcher: &dyn Launcher, url: &str, confirm: bool) {
    if confirm {
        launcher.open(url);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every URL it is asked to open.
    #[derive(Default)]
    pub(crate) struct RecordingLauncher {
        pub opened: RefCell<Vec<String>>,
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_launch_without_confirm_is_noop() {
        let launcher = RecordingLauncher::default();
        launch(&launcher, "https://vidsrc.cc/v2/embed/movie/tt0111161", false);
        assert!(launcher.opened.borrow().is_empty());
    }

    #[test]
    fn test_launch_with_confirm_opens_once() {
        let launcher = RecordingLauncher::default();
        let url = "https://vidsrc.cc/v2/embed/movie/tt0111161";
        launch(&launcher, url, true);
        assert_eq!(*launcher.opened.borrow(), vec![url.to_string()]);
    }
}
