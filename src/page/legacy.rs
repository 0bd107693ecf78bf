//! Baking of legacy pages: only image sources change.

use crate::asset::AssetResolver;
use crate::content::LegacyContent;

pub fn bake_legacy(page: &LegacyContent, resolver: &AssetResolver) -> LegacyContent {
    let mut page = page.clone();

    if let Some(images) = page.section.as_mut().and_then(|s| s.images.as_mut()) {
        images.mobile = resolver.resolve_opt(images.mobile.as_deref());
        images.desktop = resolver.resolve_opt(images.desktop.as_deref());
    }

    for step in page.steps.iter_mut().flat_map(|s| s.items.iter_mut()) {
        if let Some(image) = step.image.as_mut() {
            image.light = resolver.resolve(&image.light).into_owned();
            image.dark = resolver.resolve(&image.dark).into_owned();
        }
    }

    for item in page.testimonials.iter_mut().flat_map(|t| t.items.iter_mut()) {
        let avatar = &mut item.user.avatar;
        avatar.src = resolver.resolve(&avatar.src).into_owned();
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::BasePath;

    const PAGE: &str = r#"
section:
  title: Quiénes somos
  description: Equipo
  images:
    mobile: /images/team-m.jpg
    desktop: images/team-d.jpg
steps:
  title: Pasos
  description: Así
  items:
    - title: Uno
      description: Primero
      icon: i-lucide-1
      ui: {}
      image:
        light: /images/l.png
        dark: /images/d.png
testimonials:
  title: Opiniones
  description: Clientes
  items:
    - quote: Genial
      user:
        name: Pau
        description: Paciente
        avatar:
          src: https://i.pravatar.cc/120
"#;

    #[test]
    fn test_legacy_images_resolved() {
        let page: LegacyContent = serde_yaml::from_str(PAGE).unwrap();
        let resolver = AssetResolver::new(BasePath::new("/ml"));
        let baked = bake_legacy(&page, &resolver);

        let images = baked.section.unwrap().images.unwrap();
        assert_eq!(images.mobile.as_deref(), Some("/ml/images/team-m.jpg"));
        // relative paths are left to the browser
        assert_eq!(images.desktop.as_deref(), Some("images/team-d.jpg"));

        let step = &baked.steps.unwrap().items[0];
        assert_eq!(step.image.as_ref().unwrap().light, "/ml/images/l.png");
        assert_eq!(step.image.as_ref().unwrap().dark, "/ml/images/d.png");

        let avatar = &baked.testimonials.unwrap().items[0].user.avatar;
        assert_eq!(avatar.src, "https://i.pravatar.cc/120");
    }

    #[test]
    fn test_root_base_is_identity() {
        let page: LegacyContent = serde_yaml::from_str(PAGE).unwrap();
        let baked = bake_legacy(&page, &AssetResolver::default());
        assert_eq!(baked, page);
    }
}
