#[derive(Debug)]
enum PathSegment {
    WildCard,
    Named(String),
}

#[derive(Debug)]
struct PermissionNode {
    path: Vec<PathSegment>,
    value: bool,
}

impl PermissionNode {
    fn matches(&self, str: &str) -> bool {
        let segments: Vec<&str> = str.split('.').collect();
        for (i, segment) in segments.iter().enumerate() {
            match self.path.get(i) {
                Some(PathSegment::WildCard) => return true,
                Some(PathSegment::Named(name)) => {
                    if name != segment {
                        return false;
                    }
                }
                None => return false,
            }
        }
        segments.len() == self.path.len()
    }
}

/// Permission overrides of the console sender, first match wins.
#[derive(Debug, Default)]
pub struct PermissionOverrides {
    nodes: Vec<PermissionNode>,
}

impl PermissionOverrides {
    pub fn get_node_val(&self, name: &str) -> Option<bool> {
        self.nodes
            .iter()
            .find(|node| node.matches(name))
            .map(|node| node.value)
    }

    pub fn insert(&mut self, name: &str, value: bool) {
        let path = name
            .split('.')
            .map(|s| match s {
                "*" => PathSegment::WildCard,
                s => PathSegment::Named(s.to_owned()),
            })
            .collect();
        self.nodes.push(PermissionNode { path, value });
    }
}
