//! Sample export used by tests across the crate

pub const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
	xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
	xmlns:content="http://purl.org/rss/1.0/modules/content/"
	xmlns:wfw="http://wellformedweb.org/CommentAPI/"
	xmlns:dc="http://purl.org/dc/elements/1.1/"
	xmlns:wp="http://wordpress.org/export/1.2/"
>
<channel>
	<title>Finnern Blog</title>
	<link>http://finnern.com</link>
	<wp:wxr_version>1.2</wp:wxr_version>
	<wp:category>
		<wp:term_id>1</wp:term_id>
		<wp:cat_name><![CDATA[Travel]]></wp:cat_name>
	</wp:category>

	<item>
		<title>Hello, World! 2021</title>
		<link>http://finnern.com/?p=1</link>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[[caption id="attachment_7" align="alignnone"]<img src="http://finnern.com/wp-content/uploads/2021/05/photo.jpg" /> A photo[/caption]
Some&nbsp;text.
[gallery ids="1,2,3"]
<pre class="code">fn main() {
    println!("hi");
}</pre>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_date><![CDATA[2021-05-04 09:15:00]]></wp:post_date>
		<wp:post_name><![CDATA[]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_type><![CDATA[post]]></wp:post_type>
		<category domain="category" nicename="travel"><![CDATA[Travel]]></category>
		<category domain="post_tag" nicename="photos"><![CDATA[Photos]]></category>
		<category domain="category" nicename="notes"><![CDATA[Notes & Thoughts]]></category>
	</item>

	<item>
		<title>Second post</title>
		<dc:creator><![CDATA[admin]]></dc:creator>
		<content:encoded><![CDATA[Plain body.]]></content:encoded>
		<wp:post_date><![CDATA[2021-06-10 20:00:00]]></wp:post_date>
		<wp:post_name><![CDATA[second-post]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_type><![CDATA[post]]></wp:post_type>
	</item>

	<item>
		<title>A draft</title>
		<content:encoded><![CDATA[Not yet.]]></content:encoded>
		<wp:post_date><![CDATA[0000-00-00 00:00:00]]></wp:post_date>
		<wp:post_name><![CDATA[]]></wp:post_name>
		<wp:status><![CDATA[draft]]></wp:status>
		<wp:post_type><![CDATA[post]]></wp:post_type>
	</item>

	<item>
		<title>About</title>
		<content:encoded><![CDATA[About me.]]></content:encoded>
		<wp:post_date><![CDATA[2020-01-01 00:00:00]]></wp:post_date>
		<wp:post_name><![CDATA[about]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_type><![CDATA[page]]></wp:post_type>
	</item>

	<item>
		<title>photo.jpg</title>
		<wp:post_date><![CDATA[2021-05-04 09:10:00]]></wp:post_date>
		<wp:status><![CDATA[inherit]]></wp:status>
		<wp:post_type><![CDATA[attachment]]></wp:post_type>
	</item>
</channel>
</rss>
"#;
