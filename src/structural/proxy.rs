//! Structural Pattern: Proxy
//! Example: A caching layer in front of a slow video service
//!
//! Run with: cargo run --bin proxy
//!
//! [`CachedYouTube`] implements the same [`YouTubeLib`] trait as the real
//! service and wraps it. Clients such as [`YouTubeManager`] can't tell the
//! difference; repeated requests for the same video are answered from memory.

use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

pub trait YouTubeLib {
    fn list_videos(&self) -> String;
    fn video_info(&self, id: &str) -> String;
    fn download_video(&self, id: &str) -> String;
}

/// The real service. Every call counts as a network round trip.
#[derive(Debug, Default)]
pub struct ThirdPartyYouTube {
    remote_calls: Cell<u32>,
}

impl ThirdPartyYouTube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remote_calls(&self) -> u32 {
        self.remote_calls.get()
    }

    fn hit_network(&self, what: &str) {
        self.remote_calls.set(self.remote_calls.get() + 1);
        debug!(what, calls = self.remote_calls.get(), "remote call");
    }
}

impl YouTubeLib for ThirdPartyYouTube {
    fn list_videos(&self) -> String {
        self.hit_network("list");
        "list of videos".to_string()
    }

    fn video_info(&self, id: &str) -> String {
        self.hit_network("info");
        format!("video info for {}", id)
    }

    fn download_video(&self, id: &str) -> String {
        self.hit_network("download");
        format!("video file {}", id)
    }
}

#[derive(Debug, Default)]
pub struct CachedYouTube<S: YouTubeLib> {
    service: S,
    list: RefCell<Option<String>>,
    info: RefCell<FxHashMap<String, String>>,
    downloads: RefCell<FxHashMap<String, String>>,
}

impl<S: YouTubeLib> CachedYouTube<S> {
    pub fn new(service: S) -> Self {
        CachedYouTube {
            service,
            list: RefCell::new(None),
            info: RefCell::new(FxHashMap::default()),
            downloads: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Drops every cached answer.
    pub fn reset(&self) {
        self.list.borrow_mut().take();
        self.info.borrow_mut().clear();
        self.downloads.borrow_mut().clear();
    }
}

fn cached(
    cache: &RefCell<FxHashMap<String, String>>,
    id: &str,
    fetch: impl FnOnce() -> String,
) -> String {
    if let Some(hit) = cache.borrow().get(id) {
        trace!(id, "cache hit");
        return hit.clone();
    }
    let value = fetch();
    cache.borrow_mut().insert(id.to_string(), value.clone());
    value
}

impl<S: YouTubeLib> YouTubeLib for CachedYouTube<S> {
    fn list_videos(&self) -> String {
        self.list
            .borrow_mut()
            .get_or_insert_with(|| self.service.list_videos())
            .clone()
    }

    fn video_info(&self, id: &str) -> String {
        cached(&self.info, id, || self.service.video_info(id))
    }

    fn download_video(&self, id: &str) -> String {
        cached(&self.downloads, id, || self.service.download_video(id))
    }
}

/// Client code, written against the trait only.
pub struct YouTubeManager<'a> {
    service: &'a dyn YouTubeLib,
}

impl<'a> YouTubeManager<'a> {
    pub fn new(service: &'a dyn YouTubeLib) -> Self {
        YouTubeManager { service }
    }

    pub fn render_video_page(&self, id: &str) -> String {
        format!("Video page: {}", self.service.video_info(id))
    }

    pub fn render_list_panel(&self) -> String {
        format!("List panel: {}", self.service.list_videos())
    }

    pub fn react_on_user_input(&self) -> Vec<String> {
        vec![self.render_video_page("123"), self.render_list_panel()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_service_always_hits_network() {
        let service = ThirdPartyYouTube::new();
        let manager = YouTubeManager::new(&service);
        manager.react_on_user_input();
        manager.react_on_user_input();
        assert_eq!(service.remote_calls(), 4);
    }

    #[test]
    fn test_proxy_caches_repeated_requests() {
        let proxy = CachedYouTube::new(ThirdPartyYouTube::new());
        let manager = YouTubeManager::new(&proxy);

        let first = manager.react_on_user_input();
        let second = manager.react_on_user_input();

        assert_eq!(first, second);
        assert_eq!(first[0], "Video page: video info for 123");
        assert_eq!(proxy.service().remote_calls(), 2);
    }

    #[test]
    fn test_cache_is_per_video() {
        let proxy = CachedYouTube::new(ThirdPartyYouTube::new());
        assert_eq!(proxy.video_info("a"), "video info for a");
        assert_eq!(proxy.video_info("b"), "video info for b");
        assert_eq!(proxy.video_info("a"), "video info for a");
        assert_eq!(proxy.download_video("a"), "video file a");
        assert_eq!(proxy.service().remote_calls(), 3);
    }

    #[test]
    fn test_reset_forces_refetch() {
        let proxy = CachedYouTube::new(ThirdPartyYouTube::new());
        proxy.list_videos();
        proxy.reset();
        proxy.list_videos();
        assert_eq!(proxy.service().remote_calls(), 2);
    }
}
