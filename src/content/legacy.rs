//! The legacy collection: top-level `content/*.yml` pages built from fixed
//! blocks (hero, features, steps, pricing, testimonials, cta).
//!
//! Kept for pages that predate the section-based landing format. Shares
//! only the link, feature and image primitives with [`super::landing`].

use serde::{Deserialize, Serialize};

use super::schema::{Field, Schema};
use super::shared::{Feature, Link, TARGETS, base_schema, feature_schema, link_schema};

pub fn legacy_schema() -> Schema {
    let hero = Schema::object([Field::required("links", Schema::array(link_schema()))]);

    let section_feature = base_schema().extend([
        Field::optional("icon", Schema::string()),
        Field::optional("class", Schema::string()),
    ]);
    let section = base_schema().extend([
        Field::optional("headline", Schema::string()),
        Field::optional(
            "images",
            Schema::object([
                Field::optional("mobile", Schema::string()),
                Field::optional("desktop", Schema::string()),
            ]),
        ),
        Field::optional("features", Schema::array(section_feature)),
    ]);

    let features =
        base_schema().extend([Field::required("features", Schema::array(feature_schema()))]);

    let step = feature_schema().extend([Field::optional(
        "image",
        Schema::object([
            Field::required("light", Schema::string()),
            Field::required("dark", Schema::string()),
        ]),
    )]);
    let steps = base_schema().extend([Field::required("items", Schema::array(step))]);

    let plan = base_schema().extend([
        Field::required("price", Schema::non_empty()),
        Field::required("button", link_schema()),
        Field::required("features", Schema::array(Schema::non_empty())),
        Field::optional("highlight", Schema::Bool),
        Field::optional("billing_period", Schema::string()),
        Field::optional("billing_cycle", Schema::string()),
    ]);
    let pricing = base_schema().extend([Field::required("plans", Schema::array(plan))]);

    let user = Schema::object([
        Field::required("name", Schema::non_empty()),
        Field::required("description", Schema::non_empty()),
        Field::optional("to", Schema::string()),
        Field::required(
            "avatar",
            Schema::object([
                Field::required("src", Schema::string()),
                Field::optional("alt", Schema::string()),
            ]),
        ),
        Field::optional("target", Schema::one_of(TARGETS)),
    ]);
    let testimonial = Schema::object([
        Field::required("quote", Schema::non_empty()),
        Field::required("user", user),
    ]);
    let testimonials =
        base_schema().extend([Field::required("items", Schema::array(testimonial))]);

    let cta = base_schema().extend([Field::required("links", Schema::array(link_schema()))]);

    Schema::object([
        Field::optional("hero", hero),
        Field::optional("section", section),
        Field::optional("features", features),
        Field::optional("steps", steps),
        Field::optional("pricing", pricing),
        Field::optional("testimonials", testimonials),
        Field::optional("cta", cta),
    ])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFeature {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySection {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<SectionImages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<SectionFeature>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureBlock {
    pub title: String,
    pub description: String,
    pub features: Vec<Feature>,
}

/// Themed screenshot for a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepImage {
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub feature: Feature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<StepImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    pub title: String,
    pub description: String,
    pub items: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub title: String,
    pub description: String,
    pub price: String,
    pub button: Link,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub title: String,
    pub description: String,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialUser {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub avatar: Avatar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<super::shared::Target>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub user: TestimonialUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonials {
    pub title: String,
    pub description: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub title: String,
    pub description: String,
    pub links: Vec<Link>,
}

/// A validated legacy page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<LegacySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Steps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Testimonials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::shared::Variant;
    use serde_yaml::Value;

    const INDEX: &str = r#"
hero:
  links:
    - label: Ver planes
      to: /#pricing
      size: xl
      trailing: true
      target: _self
      color: primary
      variant: solid
steps:
  title: Cómo funciona
  description: Tres pasos
  items:
    - title: Reserva
      description: Elige hora
      icon: i-lucide-calendar
      ui: {}
      image:
        light: /images/step-light.png
        dark: /images/step-dark.png
pricing:
  title: Planes
  description: Sin permanencia
  plans:
    - title: Básico
      description: Para empezar
      price: 29€
      button:
        label: Elegir
        to: /contacto
        size: md
        target: _self
        color: neutral
        variant: outline
      features: [1 sesión, Seguimiento]
      highlight: false
testimonials:
  title: Opiniones
  description: Lo que dicen
  items:
    - quote: Muy recomendable
      user:
        name: Marta
        description: Paciente
        avatar:
          src: /images/marta.jpg
        target: _blank
"#;

    fn value(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_index_validates_and_decodes() {
        let doc = value(INDEX);
        let violations = legacy_schema().validate(&doc);
        assert!(violations.is_empty(), "{violations:?}");

        let page: LegacyContent = serde_yaml::from_value(doc).unwrap();
        let steps = page.steps.unwrap();
        assert_eq!(steps.items[0].feature.icon, "i-lucide-calendar");
        assert_eq!(
            steps.items[0].image.as_ref().unwrap().dark,
            "/images/step-dark.png"
        );
        let plan = &page.pricing.unwrap().plans[0];
        assert_eq!(plan.button.variant, Variant::Outline);
        assert_eq!(plan.features.len(), 2);
        assert!(page.cta.is_none());
    }

    #[test]
    fn test_plan_feature_must_be_non_empty() {
        let src = INDEX.replace("[1 sesión, Seguimiento]", "[1 sesión, '']");
        let violations = legacy_schema().validate(&value(&src));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "pricing.plans[0].features[1]");
    }

    #[test]
    fn test_testimonial_target_enum() {
        let src = INDEX.replace("target: _blank", "target: _parent");
        let violations = legacy_schema().validate(&value(&src));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path.to_string(),
            "testimonials.items[0].user.target"
        );
    }

    #[test]
    fn test_step_image_needs_both_themes() {
        let src = INDEX.replace("        dark: /images/step-dark.png\n", "");
        let violations = legacy_schema().validate(&value(&src));
        assert_eq!(violations[0].path.to_string(), "steps.items[0].image.dark");
    }

    #[test]
    fn test_landing_fields_are_ignored() {
        let doc = value("sections:\n  - type: nope\n");
        assert!(legacy_schema().validate(&doc).is_empty());
        let page: LegacyContent = serde_yaml::from_value(doc).unwrap();
        assert_eq!(page, LegacyContent::default());
    }
}
