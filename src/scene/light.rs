use glam::Vec3;

use crate::options::LightingOptions;

/// Which slot of the rig a light fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightRole {
    /// Uniform ambient term.
    Ambient,
    /// Main directional light.
    Key,
    /// Softer light opposite the key.
    Fill,
    /// Back light outlining the silhouette.
    Rim,
}

/// A light parented to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Rig slot.
    pub role: LightRole,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Linear RGB color.
    pub color: Vec3,
    /// Position relative to the model; `None` for ambient.
    pub position: Option<Vec3>,
    /// Whether this light casts shadows.
    pub cast_shadow: bool,
}

/// Ambient, key, fill and rim lights, in that order.
pub fn light_rig(options: &LightingOptions) -> [Light; 4] {
    let color = Vec3::from_array(options.color);
    let directional =
        |role: LightRole, intensity: f32, position: [f32; 3]| Light {
        role,
        intensity,
        color,
        position: Some(Vec3::from_array(position)),
        cast_shadow: role == LightRole::Key,
    };
    [
        Light {
            role: LightRole::Ambient,
            intensity: options.ambient,
            color,
            position: None,
            cast_shadow: false,
        },
        directional(LightRole::Key, options.key_intensity, options.key_position),
        directional(
            LightRole::Fill,
            options.fill_intensity,
            options.fill_position,
        ),
        directional(LightRole::Rim, options.rim_intensity, options.rim_position),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_has_one_of_each_role_and_only_key_casts() {
        let rig = light_rig(&LightingOptions::default());
        let roles: Vec<_> = rig.iter().map(|l| l.role).collect();
        assert_eq!(
            roles,
            [LightRole::Ambient, LightRole::Key, LightRole::Fill, LightRole::Rim]
        );
        assert!(rig[0].position.is_none());
        assert_eq!(rig.iter().filter(|l| l.cast_shadow).count(), 1);
        assert!(rig[1].cast_shadow);
    }
}
