//! Template selection per frontend flavor
//!
//! Templates are addressed by `<base_dir>/<file>` identifiers, e.g.
//! `entity/model.ts.hbs` or `vue/entity-list.vue.hbs`. The same identifiers
//! are used for embedded defaults and for user overrides.

use crate::flavor::Flavor;

/// Which half of the monorepo a template renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `apps/backend/src/modules/<entity>/`
    Backend,
    /// `apps/frontend/src/modules/<entity>/`
    Frontend,
}

/// An ordered set of templates sharing a base directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    /// Directory the templates live in
    pub base_dir: &'static str,
    /// Template file names, in generation order
    pub files: &'static [&'static str],
    /// Output side
    pub target: Target,
}

impl TemplateSet {
    /// Full template identifiers (`base_dir/file`) in order
    pub fn identifiers(&self) -> impl Iterator<Item = String> + '_ {
        self.files
            .iter()
            .map(move |file| format!("{}/{file}", self.base_dir))
    }
}

/// NestJS entity templates
const BACKEND: TemplateSet = TemplateSet {
    base_dir: "entity",
    files: &["model.ts.hbs", "service.ts.hbs", "controller.ts.hbs", "module.ts.hbs"],
    target: Target::Backend,
};

const REACT: TemplateSet = TemplateSet {
    base_dir: "entity",
    files: &["list.tsx.hbs", "form.tsx.hbs", "detail.tsx.hbs"],
    target: Target::Frontend,
};

const VUE: TemplateSet = TemplateSet {
    base_dir: "vue",
    files: &["entity-list.vue.hbs", "entity-form.vue.hbs", "entity-detail.vue.hbs"],
    target: Target::Frontend,
};

const ANGULAR: TemplateSet = TemplateSet {
    base_dir: "angular",
    files: &[
        "entity-list.component.ts.hbs",
        "entity-form.component.ts.hbs",
        "entity-detail.component.ts.hbs",
    ],
    target: Target::Frontend,
};

/// Backend template set (flavor independent)
#[must_use]
pub const fn backend_templates() -> TemplateSet {
    BACKEND
}

/// Frontend template set for a flavor
#[must_use]
pub const fn frontend_templates(flavor: Flavor) -> TemplateSet {
    match flavor {
        Flavor::React => REACT,
        Flavor::Vue => VUE,
        Flavor::Angular => ANGULAR,
    }
}

/// Every template set in the order entity generation renders them
#[must_use]
pub const fn entity_templates(flavor: Flavor) -> [TemplateSet; 2] {
    [backend_templates(), frontend_templates(flavor)]
}

/// All template sets, used to register embedded defaults
pub const ALL_SETS: [TemplateSet; 4] = [BACKEND, REACT, VUE, ANGULAR];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_flavor_has_templates() {
        for flavor in Flavor::ALL {
            let set = frontend_templates(flavor);
            assert!(!set.files.is_empty(), "{flavor} has no templates");
            assert_eq!(set.target, Target::Frontend);
        }
    }

    #[test]
    fn test_selection_is_stable_and_ordered() {
        let react = frontend_templates(Flavor::React);
        assert_eq!(react, frontend_templates(Flavor::React));
        assert_eq!(react.files, ["list.tsx.hbs", "form.tsx.hbs", "detail.tsx.hbs"]);
        assert_eq!(react.base_dir, "entity");

        let vue = frontend_templates(Flavor::Vue);
        assert_eq!(vue.base_dir, "vue");
        assert_eq!(vue.files[0], "entity-list.vue.hbs");

        let angular = frontend_templates(Flavor::Angular);
        assert_eq!(angular.base_dir, "angular");
        assert_eq!(angular.files[2], "entity-detail.component.ts.hbs");
    }

    #[test]
    fn test_backend_order() {
        let ids: Vec<_> = backend_templates().identifiers().collect();
        assert_eq!(
            ids,
            [
                "entity/model.ts.hbs",
                "entity/service.ts.hbs",
                "entity/controller.ts.hbs",
                "entity/module.ts.hbs",
            ]
        );
    }

    #[test]
    fn test_entity_templates_backend_first() {
        let [backend, frontend] = entity_templates(Flavor::Vue);
        assert_eq!(backend.target, Target::Backend);
        assert_eq!(frontend.base_dir, "vue");
    }
}
