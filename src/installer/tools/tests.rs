// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{PatchTool, Tool};

#[test]
fn test_patch_tool_args() {
    let tool = PatchTool::new("/build/parmetis/gklib", "/patches/gklib-fpic.patch");

    assert_eq!(tool.name(), "patch");
    assert_eq!(tool.args(), ["-p1", "-i", "/patches/gklib-fpic.patch"]);
}
