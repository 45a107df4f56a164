/// A material for the viewed object.
///
/// The viewer renders a single diffuse texture per object; everything
/// else an MTL file may carry is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Material {
  pub name: String,
  pub diffuse_texture_name: String,
}
