//! Detail panel resolver
//!
//! Re-locates the full record behind the focused list's selected row and
//! formats it as a key:value text block. The selected row only carries the
//! derived display key (short id, or name for volumes), so the lookup goes
//! back into the snapshot for the authoritative record. A miss degrades to
//! the category's placeholder string; a selected row can only go stale
//! while a snapshot is being replaced.

use crate::inventory::types::{ContainerSummary, ImageSummary, NetworkSummary, Volume};
use crate::snapshot::ResourceSnapshot;
use crate::ui::dashboard::state::ResourceKind;
use crate::ui::dashboard::table::{ResourceTable, container_display_name};
use crate::ui::dashboard::utils::{format_size_mb, join_kv, short_id, strip_sha256, trim_to};

/// Formats the detail text for the active category's current selection.
pub fn info_body(
    kind: ResourceKind,
    snapshot: &ResourceSnapshot,
    table: &ResourceTable,
) -> String {
    match kind {
        ResourceKind::Container => container_info(&snapshot.containers, table),
        ResourceKind::Image => image_info(&snapshot.images, table),
        ResourceKind::Volume => volume_info(&snapshot.volumes, table),
        ResourceKind::Network => network_info(&snapshot.networks, table),
    }
}

fn container_info(containers: &[ContainerSummary], table: &ResourceTable) -> String {
    let placeholder = ResourceKind::Container.no_selection();
    if containers.is_empty() || table.rows().is_empty() {
        return placeholder.to_string();
    }
    let Some(selected) = table.selected_row().and_then(|row| row.first()) else {
        return placeholder.to_string();
    };
    let Some(container) = containers.iter().find(|c| short_id(&c.id) == *selected) else {
        return placeholder.to_string();
    };

    let ports = if container.ports.is_empty() {
        "-".to_string()
    } else {
        container
            .ports
            .iter()
            .map(|p| {
                let mut entry = format!("{}/{}", p.private_port, p.port_type);
                if p.public_port != 0 {
                    entry = format!("{}->{}/{}", p.public_port, p.private_port, p.port_type);
                }
                if p.ip.is_empty() {
                    entry
                } else {
                    format!("{}:{}", p.ip, entry)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mounts = if container.mounts.is_empty() {
        "-".to_string()
    } else {
        container
            .mounts
            .iter()
            .map(|m| format!("{}:{}", trim_to(&m.source, 30), m.destination))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let network_names = container.network_names();
    let networks = if network_names.is_empty() {
        "-".to_string()
    } else {
        network_names.join(", ")
    };

    format!(
        "Name: {}\nID: {}\nImage: {}\nCommand: {}\nState: {}\nStatus: {}\nPorts: {}\nMounts: {}\nNetworks: {}",
        container_display_name(container),
        short_id(&container.id),
        container.image,
        container.command,
        container.state,
        container.status,
        ports,
        mounts,
        networks,
    )
}

fn image_info(images: &[ImageSummary], table: &ResourceTable) -> String {
    let placeholder = ResourceKind::Image.no_selection();
    if images.is_empty() || table.rows().is_empty() {
        return placeholder.to_string();
    }
    // The short id lives in the second column of the image row
    let Some(selected) = table.selected_row().and_then(|row| row.get(1)) else {
        return placeholder.to_string();
    };
    let Some(image) = images
        .iter()
        .find(|img| short_id(strip_sha256(&img.id)) == *selected)
    else {
        return placeholder.to_string();
    };

    let tags = if image.repo_tags.is_empty() {
        "<none>:<none>".to_string()
    } else {
        image.repo_tags.join(", ")
    };
    let digests = if image.repo_digests.is_empty() {
        "-".to_string()
    } else {
        image.repo_digests.join(", ")
    };

    format!(
        "RepoTags: {}\nID: {}\nSize: {}\nRepoDigests: {}\nContainers: {}",
        tags,
        short_id(strip_sha256(&image.id)),
        format_size_mb(image.size),
        digests,
        image.containers,
    )
}

fn volume_info(volumes: &[Volume], table: &ResourceTable) -> String {
    let placeholder = ResourceKind::Volume.no_selection();
    if volumes.is_empty() || table.rows().is_empty() {
        return placeholder.to_string();
    }
    let Some(selected) = table.selected_row().and_then(|row| row.first()) else {
        return placeholder.to_string();
    };
    let Some(volume) = volumes.iter().find(|v| v.name == *selected) else {
        return placeholder.to_string();
    };

    let created = if volume.created_at.is_empty() {
        "-"
    } else {
        volume.created_at.as_str()
    };

    format!(
        "Name: {}\nDriver: {}\nMountpoint: {}\nLabels: {}\nOptions: {}\nCreated: {}",
        volume.name,
        volume.driver,
        trim_to(&volume.mountpoint, 60),
        join_kv(&volume.labels),
        join_kv(&volume.options),
        created,
    )
}

fn network_info(networks: &[NetworkSummary], table: &ResourceTable) -> String {
    let placeholder = ResourceKind::Network.no_selection();
    if networks.is_empty() || table.rows().is_empty() {
        return placeholder.to_string();
    }
    let Some(row) = table.selected_row() else {
        return placeholder.to_string();
    };
    let (Some(name), Some(selected_id)) = (row.first(), row.get(1)) else {
        return placeholder.to_string();
    };
    let Some(network) = networks
        .iter()
        .find(|n| short_id(strip_sha256(&n.id)) == *selected_id || n.name == *name)
    else {
        return placeholder.to_string();
    };

    format!(
        "Name: {}\nID: {}\nDriver: {}\nScope: {}\nInternal: {}\nAttachable: {}\nIngress: {}\nEnableIPv6: {}",
        network.name,
        short_id(strip_sha256(&network.id)),
        network.driver,
        network.scope,
        network.internal,
        network.attachable,
        network.ingress,
        network.enable_ipv6,
    )
}
