//! Generic resource list widget
//!
//! One [`ResourceTable`] instance backs each of the four dashboard lists:
//! it owns the display rows, the selection cursor, the focus flag, and the
//! layout-assigned width. Row content is produced by the per-category
//! builders at the bottom of this module, one display row per record,
//! order preserving.

use crate::inventory::types::{ContainerSummary, ImageSummary, NetworkSummary, Volume};
use crate::ui::dashboard::utils::{format_size_mb, short_id, strip_sha256, trim_to};

/// Scrollable list state for one resource category.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
    focused: bool,
    width: u16,
}

impl ResourceTable {
    /// Replaces the row set. Focus is preserved; the selection is reset to
    /// the first row (the content changed wholesale) or cleared when empty.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.selected = if rows.is_empty() { None } else { Some(0) };
        self.rows = rows;
    }

    /// Moves the selection by `delta`, clamped to the row bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.selected.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, last as isize);
        self.selected = Some(next as usize);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&[String]> {
        self.selected
            .and_then(|index| self.rows.get(index))
            .map(Vec::as_slice)
    }
}

/// Display name of a container: first registered name, leading `/` removed.
pub fn container_display_name(container: &ContainerSummary) -> String {
    container
        .names
        .first()
        .map(|name| name.strip_prefix('/').unwrap_or(name).to_string())
        .unwrap_or_default()
}

/// First repository:tag label, or the `<none>:<none>` placeholder.
pub fn image_repo_tag(image: &ImageSummary) -> String {
    image
        .repo_tags
        .first()
        .cloned()
        .unwrap_or_else(|| "<none>:<none>".to_string())
}

pub fn container_rows(containers: &[ContainerSummary]) -> Vec<Vec<String>> {
    containers
        .iter()
        .map(|c| {
            vec![
                short_id(&c.id),
                trim_to(&c.image, 25),
                trim_to(&c.command, 20),
                c.status.clone(),
                container_display_name(c),
            ]
        })
        .collect()
}

pub fn image_rows(images: &[ImageSummary]) -> Vec<Vec<String>> {
    images
        .iter()
        .map(|img| {
            vec![
                image_repo_tag(img),
                short_id(strip_sha256(&img.id)),
                format_size_mb(img.size),
            ]
        })
        .collect()
}

pub fn volume_rows(volumes: &[Volume]) -> Vec<Vec<String>> {
    volumes
        .iter()
        .map(|v| {
            vec![
                v.name.clone(),
                v.driver.clone(),
                trim_to(&v.mountpoint, 40),
            ]
        })
        .collect()
}

pub fn network_rows(networks: &[NetworkSummary]) -> Vec<Vec<String>> {
    networks
        .iter()
        .map(|n| {
            vec![
                n.name.clone(),
                short_id(strip_sha256(&n.id)),
                n.driver.clone(),
                n.scope.clone(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("row-{}", i)]).collect()
    }

    #[test]
    fn set_rows_resets_selection_and_keeps_focus() {
        let mut table = ResourceTable::default();
        table.focus();
        table.set_rows(rows(3));
        assert_eq!(table.selected(), Some(0));
        assert!(table.is_focused());

        table.set_rows(Vec::new());
        assert_eq!(table.selected(), None);
        assert!(table.is_focused());
    }

    #[test]
    fn move_selection_clamps_to_bounds() {
        let mut table = ResourceTable::default();
        table.set_rows(rows(3));

        table.move_selection(-1);
        assert_eq!(table.selected(), Some(0));

        table.move_selection(1);
        table.move_selection(1);
        assert_eq!(table.selected(), Some(2));

        table.move_selection(1);
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn move_selection_on_empty_rows_is_a_noop() {
        let mut table = ResourceTable::default();
        table.move_selection(1);
        assert_eq!(table.selected(), None);
        assert!(table.selected_row().is_none());
    }

    #[test]
    fn selected_row_returns_current_row() {
        let mut table = ResourceTable::default();
        table.set_rows(rows(2));
        table.move_selection(1);
        assert_eq!(table.selected_row().unwrap()[0], "row-1");
    }

    #[test]
    fn container_row_projects_all_five_columns() {
        let container = ContainerSummary {
            id: "4b6ad7f5f5c9aa513f124fe7f2a71e94c9a4a8913b64a54c35abcdef012345".to_string(),
            image: "registry.example.com/team/very-long-image-name:latest".to_string(),
            command: "/bin/sh -c 'while true; do sleep 1; done'".to_string(),
            status: "Up 2 hours".to_string(),
            names: vec!["/web".to_string(), "/alias".to_string()],
            ..ContainerSummary::default()
        };
        let row = &container_rows(std::slice::from_ref(&container))[0];
        assert_eq!(row[0], "4b6ad7f5f5c9");
        assert_eq!(row[1], "registry.example.com/t...");
        assert_eq!(row[1].chars().count(), 25);
        assert_eq!(row[2], "/bin/sh -c 'while...");
        assert_eq!(row[3], "Up 2 hours");
        assert_eq!(row[4], "web");
    }

    #[test]
    fn container_row_with_no_names_has_empty_name_column() {
        let container = ContainerSummary {
            id: "abc".to_string(),
            ..ContainerSummary::default()
        };
        let row = &container_rows(std::slice::from_ref(&container))[0];
        assert_eq!(row[4], "");
    }

    #[test]
    fn image_row_projects_tag_id_and_size() {
        let image = ImageSummary {
            id: "sha256:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            repo_tags: vec!["nginx:latest".to_string()],
            size: 104_857_600,
            ..ImageSummary::default()
        };
        let row = &image_rows(std::slice::from_ref(&image))[0];
        assert_eq!(row, &vec!["nginx:latest", "aaaaaaaaaaaa", "100.0MB"]);
    }

    #[test]
    fn untagged_image_gets_placeholder() {
        let image = ImageSummary {
            id: "sha256:bbbb".to_string(),
            ..ImageSummary::default()
        };
        let row = &image_rows(std::slice::from_ref(&image))[0];
        assert_eq!(row[0], "<none>:<none>");
    }

    #[test]
    fn volume_row_truncates_mountpoint() {
        let volume = Volume {
            name: "data".to_string(),
            driver: "local".to_string(),
            mountpoint: "/var/lib/docker/volumes/some-very-long-volume-name/_data".to_string(),
            ..Volume::default()
        };
        let row = &volume_rows(std::slice::from_ref(&volume))[0];
        assert_eq!(row[0], "data");
        assert_eq!(row[1], "local");
        assert_eq!(row[2].chars().count(), 40);
        assert!(row[2].ends_with("..."));
    }

    #[test]
    fn network_row_strips_and_shortens_id() {
        let network = NetworkSummary {
            id: "sha256:f2de39df4ccd4c2aaafedcba9876543210fedcba".to_string(),
            name: "bridge".to_string(),
            driver: "bridge".to_string(),
            scope: "local".to_string(),
            ..NetworkSummary::default()
        };
        let row = &network_rows(std::slice::from_ref(&network))[0];
        assert_eq!(row, &vec!["bridge", "f2de39df4ccd", "bridge", "local"]);
    }
}
