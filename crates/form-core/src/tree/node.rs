use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Props de presentación arbitrarias de un nodo.
pub type Props = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldNode {
    /// Envoltorio de layout: no recibe props, sólo se recorren sus hijos.
    Layout(LayoutNode),
    /// Nodo que se declara a sí mismo como campo del formulario.
    Input(InputNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub tag: String,
    pub props: Props,
    pub children: Vec<FieldNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputNode {
    /// Tipo de campo (`input`, `textarea`, `select`, `button`, ...).
    pub kind: String,
    /// Nombre en notación bracket. Los botones no tienen nombre.
    pub name: Option<String>,
    pub props: Props,
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    pub fn layout(tag: impl Into<String>) -> Self {
        FieldNode::Layout(LayoutNode { tag: tag.into(),
                                       props: Props::new(),
                                       children: vec![] })
    }

    pub fn input(kind: impl Into<String>, name: impl Into<String>) -> Self {
        FieldNode::Input(InputNode { kind: kind.into(),
                                     name: Some(name.into()),
                                     props: Props::new(),
                                     children: vec![] })
    }

    pub fn button() -> Self {
        FieldNode::Input(InputNode { kind: "button".to_string(),
                                     name: None,
                                     props: Props::new(),
                                     children: vec![] })
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props_mut().insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: FieldNode) -> Self {
        self.children_mut().push(child);
        self
    }

    pub fn props(&self) -> &Props {
        match self {
            FieldNode::Layout(l) => &l.props,
            FieldNode::Input(i) => &i.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut Props {
        match self {
            FieldNode::Layout(l) => &mut l.props,
            FieldNode::Input(i) => &mut i.props,
        }
    }

    pub fn children(&self) -> &[FieldNode] {
        match self {
            FieldNode::Layout(l) => &l.children,
            FieldNode::Input(i) => &i.children,
        }
    }

    pub fn children_mut(&mut self) -> &mut Vec<FieldNode> {
        match self {
            FieldNode::Layout(l) => &mut l.children,
            FieldNode::Input(i) => &mut i.children,
        }
    }

    /// Primer input (profundidad primero) con el nombre dado.
    pub fn find_input<'a>(tree: &'a [FieldNode], name: &str) -> Option<&'a InputNode> {
        tree.iter().find_map(|node| {
                       if let FieldNode::Input(input) = node {
                           if input.name.as_deref() == Some(name) {
                               return Some(input);
                           }
                       }
                       FieldNode::find_input(node.children(), name)
                   })
    }
}

/// Visita todos los inputs en orden de documento (padre antes que hijos).
pub fn walk_inputs<F>(tree: &[FieldNode], visit: &mut F)
    where F: FnMut(&InputNode)
{
    for node in tree {
        if let FieldNode::Input(input) = node {
            visit(input);
        }
        walk_inputs(node.children(), visit);
    }
}

/// Variante mutable de [`walk_inputs`]; sólo la usa el dueño del árbol.
pub fn walk_inputs_mut<F>(tree: &mut [FieldNode], visit: &mut F)
    where F: FnMut(&mut InputNode)
{
    for node in tree.iter_mut() {
        if let FieldNode::Input(input) = node {
            visit(input);
        }
        walk_inputs_mut(node.children_mut(), visit);
    }
}
